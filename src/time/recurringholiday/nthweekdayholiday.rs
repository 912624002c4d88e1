use std::collections::BTreeSet;

use chrono::{
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;

/// The n-th given weekday of a month, e.g. the third Monday of January.
#[derive(Clone)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> BTreeSet<NaiveDate> {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
            .into_iter()
            .collect()
    }
}
