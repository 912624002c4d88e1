use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::time::daterange::DateRange;
use crate::vacation::dayclassifier::{DayClassifier, MarkedDay};

/// A block of `day_count` vacation days and the window it opens up once the
/// adjacent weekends and holidays are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VacationCandidate {
    core: DateRange,
    extended: DateRange,
    day_count: u32
}

impl VacationCandidate {
    pub fn new(core: DateRange, extended: DateRange, day_count: u32) -> VacationCandidate {
        debug_assert!(extended.start() <= core.start() && core.end() <= extended.end());
        debug_assert_eq!(core.len(), day_count as usize);
        VacationCandidate { core, extended, day_count }
    }

    pub fn core(&self) -> &DateRange {
        &self.core
    }

    pub fn extended(&self) -> &DateRange {
        &self.extended
    }

    pub fn core_start(&self) -> NaiveDate {
        self.core.start()
    }

    pub fn core_end(&self) -> NaiveDate {
        self.core.end()
    }

    pub fn extended_start(&self) -> NaiveDate {
        self.extended.start()
    }

    pub fn extended_end(&self) -> NaiveDate {
        self.extended.end()
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Length of the extended window, vacation days included.
    pub fn total_days_off(&self) -> i64 {
        self.extended.len() as i64
    }

    pub fn extra_days(&self) -> i64 {
        self.total_days_off() - self.day_count as i64
    }
}

impl fmt::Display for VacationCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day(s) {} -> off {}", self.day_count, self.core, self.extended)
    }
}

/// A candidate kept by the ranking, annotated with the bonus days it earns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedPeriod {
    #[serde(flatten)]
    candidate: VacationCandidate,
    extra_days: i64
}

impl RankedPeriod {
    pub fn new(candidate: VacationCandidate) -> RankedPeriod {
        RankedPeriod {
            extra_days: candidate.extra_days(),
            candidate
        }
    }

    pub fn candidate(&self) -> &VacationCandidate {
        &self.candidate
    }

    pub fn extra_days(&self) -> i64 {
        self.extra_days
    }

    /// Every day of the extended window with its role and holiday name.
    pub fn marked_days<'a>(&self, classifier: DayClassifier<'a>) -> Vec<MarkedDay<'a>> {
        let core = self.candidate.core();
        let extended = self.candidate.extended();
        extended.iter().map(|d| classifier.mark(core, extended, d)).collect()
    }
}

impl fmt::Display for RankedPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{})", self.candidate, self.extra_days)
    }
}

/// Consecutive ranked periods sharing the same number of bonus days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodGroup {
    pub extra_days: i64,
    pub periods: Vec<RankedPeriod>
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::holidayindex::{Holiday, HolidayIndex};
    use crate::vacation::dayclassifier::DayMark;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn first_january_week() -> VacationCandidate {
        VacationCandidate::new(
            DateRange::new(date(2025, 1, 6), date(2025, 1, 10)),
            DateRange::new(date(2025, 1, 4), date(2025, 1, 12)),
            5
        )
    }

    #[test]
    fn days_off_and_extra_days() {
        let candidate = first_january_week();
        assert_eq!(candidate.total_days_off(), 9);
        assert_eq!(candidate.extra_days(), 4);
        assert_eq!(RankedPeriod::new(candidate).extra_days(), 4);
    }

    #[test]
    fn marked_days_cover_extended_window() {
        let index = HolidayIndex::from_holidays(vec![Holiday::new(date(2025, 1, 1), "New Year")]);
        let period = RankedPeriod::new(first_january_week());
        let marks: Vec<DayMark> = period
            .marked_days(DayClassifier::new(&index))
            .into_iter()
            .map(|m| m.mark)
            .collect();
        assert_eq!(marks.len(), 9);
        assert_eq!(marks.iter().filter(|m| **m == DayMark::CoreVacation).count(), 5);
        assert_eq!(marks.iter().filter(|m| **m == DayMark::BonusNonWorkday).count(), 4);
    }

    #[test]
    fn serializes_flat() {
        let value = serde_json::to_value(RankedPeriod::new(first_january_week())).unwrap();
        assert_eq!(value["extra_days"], 4);
        assert_eq!(value["day_count"], 5);
        assert_eq!(value["core"]["start"], "2025-01-06");
    }
}
