use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Country code plus optional subdivision code selecting a holiday calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    country: String,
    subdivision: Option<String>
}

impl Region {
    pub fn new(country: impl Into<String>, subdivision: Option<String>) -> Region {
        Region {
            country: country.into(),
            subdivision: subdivision.filter(|s| !s.is_empty())
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn subdivision(&self) -> Option<&str> {
        self.subdivision.as_deref()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subdivision {
            Some(sub) => write!(f, "{}-{}", self.country, sub),
            None => write!(f, "{}", self.country)
        }
    }
}

/// One provider entry: a named holiday covering `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySpan {
    start: NaiveDateTime,
    end: NaiveDateTime,
    name: String
}

impl HolidaySpan {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, name: impl Into<String>) -> HolidaySpan {
        HolidaySpan { start, end, name: name.into() }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Source of holiday calendars, queried per region and calendar year.
///
/// Unknown country or subdivision codes are not an error: implementations
/// return empty collections for them.
pub trait HolidayProvider {
    fn holidays(&self, country: &str, subdivision: Option<&str>, year: i32) -> Vec<HolidaySpan>;

    /// Country code to display name.
    fn countries(&self) -> BTreeMap<String, String>;

    /// Subdivision code to display name, empty when the country has none.
    fn subdivisions(&self, country: &str) -> BTreeMap<String, String>;

    fn holidays_for(&self, region: &Region, year: i32) -> Vec<HolidaySpan> {
        self.holidays(region.country(), region.subdivision(), year)
    }

    fn is_known_region(&self, region: &Region) -> bool {
        self.countries().contains_key(region.country())
            && region
                .subdivision()
                .is_none_or(|sub| self.subdivisions(region.country()).contains_key(sub))
    }
}
