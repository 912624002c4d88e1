use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use crate::configuration::{ConfigurationError, SearchConfig};
use crate::holiday::holidayindex::HolidayIndex;
use crate::holiday::holidayindexcache::HolidayIndexCache;
use crate::holiday::holidayprovider::HolidayProvider;
use crate::manager::managererror::ManagerError;
use crate::vacation::dayclassifier::DayClassifier;
use crate::vacation::periodranker::PeriodRanker;
use crate::vacation::periodsearch::PeriodSearch;
use crate::vacation::vacationperiod::RankedPeriod;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Manager(#[from] ManagerError)
}

/// Runs the full sweep over every requested vacation length.
///
/// Holiday indexes are memoized per region and year span for the lifetime of
/// the planner.
pub struct VacationPlanner<'p> {
    provider: &'p dyn HolidayProvider,
    cache: HolidayIndexCache
}

impl<'p> VacationPlanner<'p> {
    pub fn new(provider: &'p dyn HolidayProvider) -> VacationPlanner<'p> {
        VacationPlanner {
            provider,
            cache: HolidayIndexCache::new()
        }
    }

    pub fn holiday_index(&self, config: &SearchConfig) -> Arc<HolidayIndex> {
        let (year_from, year_to) = config.year_span();
        self.cache.get_or_build(self.provider, &config.region(), year_from, year_to)
    }

    pub fn plan(&self, config: &SearchConfig) -> Result<Vec<RankedPeriod>, ConfigurationError> {
        config.validate()?;
        let index = self.holiday_index(config);
        Ok(VacationPlanner::plan_with_index(&index, config))
    }

    /// Sweep against a prebuilt index; `config` must already be valid.
    pub fn plan_with_index(index: &HolidayIndex, config: &SearchConfig) -> Vec<RankedPeriod> {
        let horizon = config.horizon();
        info!(
            "searching {} for {}..={} vacation day(s) in {}",
            config.region(), config.min_days(), config.max_days(), horizon
        );
        if config.min_gap_between_periods() > 0 {
            debug!("min gap {} has no effect without existing periods", config.min_gap_between_periods());
        }

        let search = PeriodSearch::new(DayClassifier::new(index));
        // Day-counts are searched independently: no existing periods, no gap.
        let results = (config.min_days()..=config.max_days())
            .map(|day_count| search.search(&horizon, day_count, &[], 0));
        let ranked = PeriodRanker::rank(results);

        info!("{} beneficial period(s) found", ranked.len());
        ranked
    }
}
