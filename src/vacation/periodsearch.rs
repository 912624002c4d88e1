use chrono::NaiveDate;
use log::debug;
use thiserror::Error;

use crate::time::daterange::DateRange;
use crate::time::utility::shift_days;
use crate::vacation::dayclassifier::DayClassifier;
use crate::vacation::vacationperiod::VacationCandidate;
use crate::vacation::windowexpander::WindowExpander;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no admissible {day_count}-day vacation within {horizon}")]
    NoCandidateFound {
        day_count: u32,
        horizon: DateRange
    }
}

/// Exhaustive scan of a horizon for one vacation length.
#[derive(Clone, Copy)]
pub struct PeriodSearch<'a> {
    classifier: DayClassifier<'a>,
    expander: WindowExpander<'a>
}

impl<'a> PeriodSearch<'a> {
    pub fn new(classifier: DayClassifier<'a>) -> PeriodSearch<'a> {
        PeriodSearch {
            classifier,
            expander: WindowExpander::new(classifier)
        }
    }

    /// Every admissible `day_count`-day vacation starting on a workday inside
    /// `horizon`, in ascending start order.
    ///
    /// A candidate is rejected when its extended window, widened by `min_gap`
    /// days on each side, overlaps any of `existing`.
    pub fn search(
        &self,
        horizon: &DateRange,
        day_count: u32,
        existing: &[DateRange],
        min_gap: u32
    ) -> Result<Vec<VacationCandidate>, SearchError> {
        let no_candidate = || SearchError::NoCandidateFound {
            day_count,
            horizon: *horizon
        };
        if day_count == 0 {
            return Err(no_candidate());
        }

        let mut candidates = Vec::new();
        for d in horizon.iter() {
            if !self.classifier.is_workday(d) {
                continue;
            }

            let Some(core_end) = shift_days(d, day_count as i64 - 1) else {
                break;
            };
            // Later starts only overshoot further.
            if core_end > horizon.end() {
                break;
            }

            let core = DateRange::new(d, core_end);
            let extended = self.expander.expand(&core);

            let buffered = extended.buffered(min_gap as u64);
            if existing.iter().any(|period| buffered.overlaps(period)) {
                continue;
            }

            candidates.push(VacationCandidate::new(core, extended, day_count));
        }

        debug!("{} candidate(s) for {} day(s) in {}", candidates.len(), day_count, horizon);
        if candidates.is_empty() {
            Err(no_candidate())
        } else {
            Ok(candidates)
        }
    }

    /// Standalone ordering: most days off first, then closest to `horizon_start`.
    pub fn sort_by_days_off(candidates: &mut [VacationCandidate], horizon_start: NaiveDate) {
        candidates.sort_by(|a, b| {
            b.total_days_off()
                .cmp(&a.total_days_off())
                .then_with(|| {
                    let da = (a.core_start() - horizon_start).num_days().abs();
                    let db = (b.core_start() - horizon_start).num_days().abs();
                    da.cmp(&db)
                })
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::holidayindex::{Holiday, HolidayIndex};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_year_index() -> HolidayIndex {
        HolidayIndex::from_holidays(vec![Holiday::new(date(2025, 1, 1), "New Year")])
    }

    #[test]
    fn every_candidate_starts_on_a_workday() {
        let index = new_year_index();
        let classifier = DayClassifier::new(&index);
        let search = PeriodSearch::new(classifier);
        let horizon = DateRange::new(date(2025, 1, 1), date(2025, 1, 31));

        let candidates = search.search(&horizon, 3, &[], 0).unwrap();
        assert!(candidates.iter().all(|c| classifier.is_workday(c.core_start())));
        // first workday of 2025 is Thu 2025-01-02, last 3-day start fitting is Wed 2025-01-29
        assert_eq!(candidates.first().unwrap().core_start(), date(2025, 1, 2));
        assert_eq!(candidates.last().unwrap().core_start(), date(2025, 1, 29));
        assert!(candidates.iter().all(|c| c.core_end() <= horizon.end()));
    }

    #[test]
    fn first_january_week_window() {
        let index = new_year_index();
        let search = PeriodSearch::new(DayClassifier::new(&index));
        let horizon = DateRange::new(date(2025, 1, 1), date(2025, 12, 31));

        let candidates = search.search(&horizon, 5, &[], 0).unwrap();
        let week = candidates
            .iter()
            .find(|c| c.core_start() == date(2025, 1, 6))
            .unwrap();
        assert_eq!(week.core_end(), date(2025, 1, 10));
        assert_eq!(week.extended_start(), date(2025, 1, 4));
        assert_eq!(week.extended_end(), date(2025, 1, 12));
        assert_eq!(week.total_days_off(), 9);
        assert_eq!(week.extra_days(), 4);
    }

    #[test]
    fn too_long_for_horizon() {
        let index = HolidayIndex::default();
        let search = PeriodSearch::new(DayClassifier::new(&index));
        let horizon = DateRange::new(date(2025, 3, 3), date(2025, 3, 7));

        assert_eq!(
            search.search(&horizon, 6, &[], 0),
            Err(SearchError::NoCandidateFound { day_count: 6, horizon })
        );
        assert_eq!(search.search(&horizon, 5, &[], 0).unwrap().len(), 1);
    }

    #[test]
    fn existing_periods_and_gap_reject_overlaps() {
        let index = HolidayIndex::default();
        let search = PeriodSearch::new(DayClassifier::new(&index));
        // Mon 2025-03-03 .. Fri 2025-03-14
        let horizon = DateRange::new(date(2025, 3, 3), date(2025, 3, 14));
        let booked = [DateRange::new(date(2025, 3, 10), date(2025, 3, 10))];

        let free = search.search(&horizon, 1, &[], 0).unwrap();
        assert_eq!(free.len(), 10);

        // Fri 03-07 extends to Sun 03-09, just short of the booked Monday.
        let no_gap = search.search(&horizon, 1, &booked, 0).unwrap();
        let starts: Vec<NaiveDate> = no_gap.iter().map(|c| c.core_start()).collect();
        assert_eq!(starts.len(), 9);
        assert!(!starts.contains(&date(2025, 3, 10)));
        assert!(starts.contains(&date(2025, 3, 7)));
        assert!(starts.contains(&date(2025, 3, 11)));

        let with_gap = search.search(&horizon, 1, &booked, 1).unwrap();
        let starts: Vec<NaiveDate> = with_gap.iter().map(|c| c.core_start()).collect();
        assert!(!starts.contains(&date(2025, 3, 7)));
        assert!(!starts.contains(&date(2025, 3, 11)));
        assert!(starts.contains(&date(2025, 3, 6)));
        assert!(starts.contains(&date(2025, 3, 12)));
    }

    #[test]
    fn all_placements_blocked() {
        let index = HolidayIndex::default();
        let search = PeriodSearch::new(DayClassifier::new(&index));
        let horizon = DateRange::new(date(2025, 3, 3), date(2025, 3, 7));
        let booked = [horizon];
        assert!(matches!(
            search.search(&horizon, 1, &booked, 0),
            Err(SearchError::NoCandidateFound { day_count: 1, .. })
        ));
    }

    #[test]
    fn standalone_ordering() {
        let index = new_year_index();
        let search = PeriodSearch::new(DayClassifier::new(&index));
        let horizon = DateRange::new(date(2025, 1, 1), date(2025, 1, 31));

        let mut candidates = search.search(&horizon, 1, &[], 0).unwrap();
        PeriodSearch::sort_by_days_off(&mut candidates, horizon.start());
        // Fri 01-03 and Mon 01-06 both give 3 days off; the earlier one is closer.
        assert_eq!(candidates[0].total_days_off(), 3);
        assert_eq!(candidates[0].core_start(), date(2025, 1, 3));
        assert_eq!(candidates[1].core_start(), date(2025, 1, 6));
        assert!(candidates.windows(2).all(|w| w[0].total_days_off() >= w[1].total_days_off()));
    }
}
