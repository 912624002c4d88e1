use std::collections::{BTreeSet, HashMap};

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;
use super::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};

/// Same month and day every year, optionally moved off the weekend.
#[derive(Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    weekend_adjustment_rules: WeekendAdjustmentRule
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32, weekend_adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> Option<FixedDateHoliday> {
        // Feb 29 is accepted; it only materializes in leap years.
        NaiveDate::from_ymd_opt(2024, month, day)?;
        Some(FixedDateHoliday {
            month,
            day,
            weekend_adjustment_rules: WeekendAdjustmentRule::new(weekend_adjustment_map)
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .map(|d| self.weekend_adjustment_rules.adjust(d))
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> BTreeSet<NaiveDate> {
        let mut holiday_set = BTreeSet::new();

        if let Some(d) = self.observed_in(year).filter(|d| d.year() == year) {
            holiday_set.insert(d);
        }

        // An observed day can cross into the neighbouring year (Jan 1 on a Saturday).
        if self.weekend_adjustment_rules.max_shift() > 0 {
            for neighbour in [year - 1, year + 1] {
                if let Some(d) = self.observed_in(neighbour).filter(|d| d.year() == year) {
                    holiday_set.insert(d);
                }
            }
        }

        holiday_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unadjusted_fixed_date() {
        let christmas = FixedDateHoliday::new(12, 25, &HashMap::new()).unwrap();
        assert_eq!(christmas.get_holiday(2025), BTreeSet::from([date(2025, 12, 25)]));
        assert!(christmas.is_holiday(&date(2027, 12, 25)));
    }

    #[test]
    fn observed_day_crosses_year_boundary() {
        let map = HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday),
        ]);
        let new_year = FixedDateHoliday::new(1, 1, &map).unwrap();
        // 2022-01-01 is a Saturday, observed Friday 2021-12-31
        assert_eq!(new_year.get_holiday(2022), BTreeSet::new());
        assert_eq!(new_year.get_holiday(2021), BTreeSet::from([date(2021, 1, 1), date(2021, 12, 31)]));
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        let leap = FixedDateHoliday::new(2, 29, &HashMap::new()).unwrap();
        assert_eq!(leap.get_holiday(2024).len(), 1);
        assert!(leap.get_holiday(2025).is_empty());
        assert!(FixedDateHoliday::new(2, 30, &HashMap::new()).is_none());
    }
}
