use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::holiday::holidayprovider::Region;
use crate::holiday::rulebasedprovider::RuleBasedHolidayProvider;
use crate::manager::managererror::ManagerError;
use crate::time::daterange::DateRange;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("country code must not be empty")]
    EmptyCountry,
    #[error("horizon end {end} must be after horizon start {start}")]
    EmptyHorizon {
        start: NaiveDate,
        end: NaiveDate
    },
    #[error("minimum vacation days must be at least 1")]
    ZeroMinDays,
    #[error("maximum vacation days {max} is below minimum {min}")]
    DayRangeInverted {
        min: u32,
        max: u32
    }
}

/// What to search for: region, horizon and the range of vacation lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    region_country: String,
    #[serde(default)]
    region_subdivision: Option<String>,
    horizon_start: NaiveDate,
    horizon_end: NaiveDate,
    min_days: u32,
    max_days: u32,
    #[serde(default)]
    min_gap_between_periods: u32
}

impl SearchConfig {
    pub fn new(
        region_country: impl Into<String>,
        horizon_start: NaiveDate,
        horizon_end: NaiveDate,
        min_days: u32,
        max_days: u32
    ) -> SearchConfig {
        SearchConfig {
            region_country: region_country.into(),
            region_subdivision: None,
            horizon_start,
            horizon_end,
            min_days,
            max_days,
            min_gap_between_periods: 0
        }
    }

    pub fn with_subdivision(mut self, subdivision: impl Into<String>) -> SearchConfig {
        self.region_subdivision = Some(subdivision.into());
        self
    }

    pub fn with_min_gap(mut self, min_gap: u32) -> SearchConfig {
        self.min_gap_between_periods = min_gap;
        self
    }

    pub fn region(&self) -> Region {
        Region::new(self.region_country.clone(), self.region_subdivision.clone())
    }

    pub fn horizon(&self) -> DateRange {
        DateRange::new(self.horizon_start, self.horizon_end)
    }

    /// Calendar years the holiday index must cover. Window expansion may run
    /// past either horizon edge, so one neighbouring year is added on each side.
    pub fn year_span(&self) -> (i32, i32) {
        (
            self.horizon_start.year().saturating_sub(1),
            self.horizon_end.year().saturating_add(1)
        )
    }

    pub fn min_days(&self) -> u32 {
        self.min_days
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    pub fn min_gap_between_periods(&self) -> u32 {
        self.min_gap_between_periods
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.region_country.trim().is_empty() {
            return Err(ConfigurationError::EmptyCountry);
        }
        if self.horizon_end <= self.horizon_start {
            return Err(ConfigurationError::EmptyHorizon {
                start: self.horizon_start,
                end: self.horizon_end
            });
        }
        if self.min_days < 1 {
            return Err(ConfigurationError::ZeroMinDays);
        }
        if self.max_days < self.min_days {
            return Err(ConfigurationError::DayRangeInverted {
                min: self.min_days,
                max: self.max_days
            });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    search: SearchConfig,
    #[serde(default)]
    holiday_calendars: Vec<serde_json::Value>
}

/// A search request together with the holiday calendars it runs against.
pub struct Configuration {
    search: SearchConfig,
    provider: RuleBasedHolidayProvider
}

impl Configuration {
    pub fn new(search: SearchConfig, provider: RuleBasedHolidayProvider) -> Configuration {
        Configuration { search, provider }
    }

    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    pub fn provider(&self) -> &RuleBasedHolidayProvider {
        &self.provider
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        let provider = RuleBasedHolidayProvider::from_json_vec(&json_prop.holiday_calendars)?;
        Ok(Configuration::new(json_prop.search, provider))
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        Configuration::from_json(json_value)
    }
}
