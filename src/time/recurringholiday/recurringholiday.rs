use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

/// A holiday rule that yields the date(s) it falls on in a given year.
pub trait RecurringHoliday: Send + Sync {

    fn get_holiday(&self, year: i32) -> BTreeSet<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        let holiday_set = self.get_holiday(d.year());
        holiday_set.contains(d)
    }
}
