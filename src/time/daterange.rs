use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time::utility::inclusive_days;

/// Inclusive range of calendar days, always ordered `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate
}

impl DateRange {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> DateRange {
        if d1 > d2 {
            DateRange { start: d2, end: d1 }
        } else {
            DateRange { start: d1, end: d2 }
        }
    }

    pub fn single(d: NaiveDate) -> DateRange {
        DateRange { start: d, end: d }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn len(&self) -> usize {
        inclusive_days(self.start, self.end) as usize
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        (d >= self.start) && (d <= self.end)
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Widens the range by `days` on both sides, saturating at chrono's limits.
    pub fn buffered(&self, days: u64) -> DateRange {
        let days = Days::new(days);
        DateRange {
            start: self.start.checked_sub_days(days).unwrap_or(NaiveDate::MIN),
            end: self.end.checked_add_days(days).unwrap_or(NaiveDate::MAX)
        }
    }

    pub fn iter(&self) -> DateRangeIterator<'_> {
        DateRangeIterator {
            range: self,
            index: 0,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

pub struct DateRangeIterator<'a> {
    range: &'a DateRange,
    index: usize,
}

impl<'a> Iterator for DateRangeIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range.len() {
            let result = self.range.start.checked_add_days(Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
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
    fn new_orders_its_bounds() {
        let range = DateRange::new(date(2025, 3, 10), date(2025, 3, 1));
        assert_eq!(range.start(), date(2025, 3, 1));
        assert_eq!(range.end(), date(2025, 3, 10));
        assert_eq!(range.len(), 10);
    }

    #[test]
    fn iterates_every_day_across_month_end() {
        let range = DateRange::new(date(2025, 1, 30), date(2025, 2, 2));
        let days: Vec<NaiveDate> = range.iter().collect();
        assert_eq!(days, vec![date(2025, 1, 30), date(2025, 1, 31), date(2025, 2, 1), date(2025, 2, 2)]);
    }

    #[test]
    fn overlap_is_inclusive() {
        let a = DateRange::new(date(2025, 5, 1), date(2025, 5, 5));
        let touching = DateRange::new(date(2025, 5, 5), date(2025, 5, 9));
        let apart = DateRange::new(date(2025, 5, 6), date(2025, 5, 9));
        assert!(a.overlaps(&touching));
        assert!(!a.overlaps(&apart));
        assert!(a.buffered(1).overlaps(&apart));
    }

    #[test]
    fn contains_bounds() {
        let range = DateRange::single(date(2025, 7, 4));
        assert!(range.contains(date(2025, 7, 4)));
        assert!(!range.contains(date(2025, 7, 5)));
        assert_eq!(range.len(), 1);
    }
}
