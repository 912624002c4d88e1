use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use super::recurringholiday::RecurringHoliday;
use crate::time::utility::{days_of_month, shift_days};

/// The last given weekday of a month, e.g. the last Monday of May.
#[derive(Clone)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { month, weekday })
        }
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> BTreeSet<NaiveDate> {
        let Some(eom) = NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month)) else {
            return BTreeSet::new();
        };

        let days_back = (eom.weekday().num_days_from_monday() as i64
                         - self.weekday.num_days_from_monday() as i64 + 7) % 7;

        shift_days(eom, -days_back).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn last_monday_of_may() {
        let memorial = LastWeekdayHoliday::new(5, Weekday::Mon).unwrap();
        assert_eq!(memorial.get_holiday(2025), BTreeSet::from([date(2025, 5, 26)]));
        assert_eq!(memorial.get_holiday(2026), BTreeSet::from([date(2026, 5, 25)]));
    }

    #[test]
    fn month_ending_on_the_weekday() {
        // 2025-08-31 is a Sunday
        let rule = LastWeekdayHoliday::new(8, Weekday::Sun).unwrap();
        assert_eq!(rule.get_holiday(2025), BTreeSet::from([date(2025, 8, 31)]));
        // last Friday of December 2025
        let rule = LastWeekdayHoliday::new(12, Weekday::Fri).unwrap();
        assert_eq!(rule.get_holiday(2025), BTreeSet::from([date(2025, 12, 26)]));
    }
}
