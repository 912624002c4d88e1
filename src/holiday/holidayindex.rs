use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use serde::Serialize;

use crate::holiday::holidayprovider::{HolidayProvider, HolidaySpan, Region};
use crate::time::utility::ONE_DAY;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Holiday {
    date: NaiveDate,
    name: String
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Holiday {
        Holiday { date, name: name.into() }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Every holiday date of a region over an inclusive span of calendar years.
///
/// Built once from the provider and read-only afterwards. Names are kept for
/// display; membership only looks at the calendar day.
#[derive(Debug, Clone, Default)]
pub struct HolidayIndex {
    holidays: BTreeMap<NaiveDate, Vec<String>>
}

impl HolidayIndex {
    /// Queries `provider` once per year in `[year_from, year_to]` and flattens
    /// each returned span into one holiday per covered day.
    pub fn build(provider: &dyn HolidayProvider, region: &Region, year_from: i32, year_to: i32) -> HolidayIndex {
        let mut index = HolidayIndex::default();
        for year in year_from..=year_to {
            for span in provider.holidays_for(region, year) {
                index.insert_span(&span);
            }
        }
        debug!(
            "holiday index for {} {}..={}: {} dates",
            region, year_from, year_to, index.len()
        );
        index
    }

    pub fn from_holidays<I>(holidays: I) -> HolidayIndex
        where I: IntoIterator<Item = Holiday> {
        let mut index = HolidayIndex::default();
        for holiday in holidays {
            index.insert(holiday.date, holiday.name);
        }
        index
    }

    fn insert(&mut self, date: NaiveDate, name: String) {
        let names = self.holidays.entry(date).or_default();
        if !names.contains(&name) {
            names.push(name);
        }
    }

    /// The span end is exclusive; a span starting mid-day still claims its start day.
    fn insert_span(&mut self, span: &HolidaySpan) {
        let mut instant = span.start();
        while instant < span.end() {
            self.insert(instant.date(), span.name().to_owned());
            match instant.checked_add_days(ONE_DAY) {
                Some(next) => instant = next,
                None => break
            }
        }
    }

    #[inline]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Membership test for an instant, normalized to its calendar day.
    pub fn is_holiday_at(&self, instant: NaiveDateTime) -> bool {
        self.is_holiday(instant.date())
    }

    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays
            .get(&date)
            .and_then(|names| names.first())
            .map(String::as_str)
    }

    pub fn holiday_names(&self, date: NaiveDate) -> &[String] {
        self.holidays.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct holiday dates.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// All holidays in date order, one entry per (date, name).
    pub fn holidays(&self) -> impl Iterator<Item = Holiday> + '_ {
        self.holidays
            .iter()
            .flat_map(|(date, names)| names.iter().map(move |name| Holiday::new(*date, name.clone())))
    }
}
