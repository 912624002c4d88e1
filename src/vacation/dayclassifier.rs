use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::holiday::holidayindex::HolidayIndex;
use crate::time::daterange::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayKind {
    Workday,
    Weekend,
    Holiday
}

/// Role of a calendar day relative to one vacation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayMark {
    CoreVacation,
    BonusNonWorkday,
    Plain
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkedDay<'a> {
    pub date: NaiveDate,
    pub mark: DayMark,
    pub holiday_name: Option<&'a str>
}

/// Workday / weekend / holiday predicates over a fixed holiday index.
#[derive(Clone, Copy)]
pub struct DayClassifier<'a> {
    holidays: &'a HolidayIndex
}

impl<'a> DayClassifier<'a> {
    pub fn new(holidays: &'a HolidayIndex) -> DayClassifier<'a> {
        DayClassifier { holidays }
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    #[inline]
    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holidays.is_holiday(d)
    }

    #[inline]
    pub fn is_non_workday(&self, d: NaiveDate) -> bool {
        self.is_weekend(d) || self.is_holiday(d)
    }

    #[inline]
    pub fn is_workday(&self, d: NaiveDate) -> bool {
        !self.is_non_workday(d)
    }

    /// A holiday falling on a weekend is reported as `Holiday`.
    pub fn classify(&self, d: NaiveDate) -> DayKind {
        if self.is_holiday(d) {
            DayKind::Holiday
        } else if self.is_weekend(d) {
            DayKind::Weekend
        } else {
            DayKind::Workday
        }
    }

    pub fn mark(&self, core: &DateRange, extended: &DateRange, d: NaiveDate) -> MarkedDay<'a> {
        let mark = if core.contains(d) {
            DayMark::CoreVacation
        } else if extended.contains(d) && self.is_non_workday(d) {
            DayMark::BonusNonWorkday
        } else {
            DayMark::Plain
        };
        MarkedDay {
            date: d,
            mark,
            holiday_name: self.holidays.holiday_name(d)
        }
    }
}
