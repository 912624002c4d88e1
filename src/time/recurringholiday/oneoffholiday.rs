use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use super::recurringholiday::RecurringHoliday;

/// A holiday declared for a single date only (royal weddings, jubilees).
#[derive(Clone)]
pub struct OneOffHoliday {
    date: NaiveDate
}

impl OneOffHoliday {
    pub fn new(date: NaiveDate) -> OneOffHoliday {
        OneOffHoliday { date }
    }
}

impl RecurringHoliday for OneOffHoliday {
    fn get_holiday(&self, year: i32) -> BTreeSet<NaiveDate> {
        Some(self.date).filter(|d| d.year() == year).into_iter().collect()
    }
}
