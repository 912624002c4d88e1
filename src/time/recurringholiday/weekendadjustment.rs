use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use crate::time::utility::shift_days;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Observed-day rule for fixed-date holidays landing on a weekend.
/// Indexed by `Weekday::num_days_from_monday()`, each slot holds the day shift.
#[derive(Clone)]
pub struct WeekendAdjustmentRule {
    rule: [Option<i64>; 7]
}

impl WeekendAdjustmentRule {
    /// Consecutive adjusted weekdays are skipped over, so a Saturday rolled
    /// forward with Sunday also in the map lands on Monday.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> WeekendAdjustmentRule {
        let mut rule: [Option<i64>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let next_weekday = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut to_weekday = weekday;
            let mut shift = 0i64;
            let step = adj as i64;
            while adjustment_map.contains_key(&to_weekday) && shift.abs() < 7 {
                to_weekday = next_weekday(&to_weekday);
                shift += step;
            }

            rule[weekday.num_days_from_monday() as usize] = Some(shift);
        }

        WeekendAdjustmentRule { rule }
    }

    pub fn is_empty(&self) -> bool {
        self.rule.iter().all(Option::is_none)
    }

    pub fn max_shift(&self) -> i64 {
        self.rule.iter().flatten().map(|s| s.abs()).max().unwrap_or(0)
    }

    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        match self.rule[d.weekday().num_days_from_monday() as usize] {
            Some(shift) => shift_days(d, shift).unwrap_or(d),
            None => d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saturday_and_sunday_roll_to_monday() {
        let map = HashMap::from([
            (Weekday::Sat, WeekendAdjustment::NextWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday),
        ]);
        let rule = WeekendAdjustmentRule::new(&map);
        // 2026-07-04 is a Saturday
        assert_eq!(rule.adjust(date(2026, 7, 4)), date(2026, 7, 6));
        assert_eq!(rule.adjust(date(2026, 7, 5)), date(2026, 7, 6));
        assert_eq!(rule.adjust(date(2026, 7, 3)), date(2026, 7, 3));
        assert_eq!(rule.max_shift(), 2);
    }

    #[test]
    fn split_observance() {
        let map = HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday),
        ]);
        let rule = WeekendAdjustmentRule::new(&map);
        assert_eq!(rule.adjust(date(2026, 7, 4)), date(2026, 7, 3));
        assert_eq!(rule.adjust(date(2027, 7, 4)), date(2027, 7, 5));
    }

    #[test]
    fn empty_map_never_moves() {
        let rule = WeekendAdjustmentRule::new(&HashMap::new());
        assert!(rule.is_empty());
        assert_eq!(rule.adjust(date(2026, 7, 4)), date(2026, 7, 4));
    }
}
