use log::debug;

use crate::vacation::periodsearch::SearchError;
use crate::vacation::vacationperiod::{PeriodGroup, RankedPeriod, VacationCandidate};

/// Merges per-day-count search results into one globally ordered list.
pub struct PeriodRanker;

impl PeriodRanker {
    /// Drops day-counts without candidates and candidates without bonus days,
    /// then orders by bonus days (descending) and vacation start (ascending).
    pub fn rank<I>(per_day_count: I) -> Vec<RankedPeriod>
        where I: IntoIterator<Item = Result<Vec<VacationCandidate>, SearchError>> {
        let mut ranked: Vec<RankedPeriod> = per_day_count
            .into_iter()
            .filter_map(|result| match result {
                Ok(candidates) => Some(candidates),
                Err(error) => {
                    debug!("skipped: {}", error);
                    None
                }
            })
            .flatten()
            .map(RankedPeriod::new)
            .filter(|period| period.extra_days() > 0)
            .collect();

        ranked.sort_by(|a, b| {
            b.extra_days()
                .cmp(&a.extra_days())
                .then_with(|| a.candidate().core_start().cmp(&b.candidate().core_start()))
        });
        ranked
    }

    /// Splits an ordered list into runs of equal `extra_days`, keeping order.
    pub fn group_by_extra_days(ranked: &[RankedPeriod]) -> Vec<PeriodGroup> {
        let mut groups: Vec<PeriodGroup> = Vec::new();
        for period in ranked {
            match groups.last_mut() {
                Some(group) if group.extra_days == period.extra_days() => group.periods.push(*period),
                _ => groups.push(PeriodGroup {
                    extra_days: period.extra_days(),
                    periods: vec![*period]
                })
            }
        }
        groups
    }
}
