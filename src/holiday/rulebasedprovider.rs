use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use log::warn;

use crate::holiday::holidayprovider::{HolidayProvider, HolidaySpan};
use crate::holiday::regioncalendar::{RegionCalendar, get_region_calendar_from_json};
use crate::manager::manager::{IManager, Manager};
use crate::manager::managererror::ManagerError;

/// Holiday provider evaluating recurring-holiday rules loaded from JSON.
pub struct RuleBasedHolidayProvider {
    calendars: Manager<Arc<RegionCalendar>>
}

impl RuleBasedHolidayProvider {
    pub fn new() -> RuleBasedHolidayProvider {
        RuleBasedHolidayProvider {
            calendars: Manager::new(get_region_calendar_from_json)
        }
    }

    pub fn from_json_vec(json_vec: &[serde_json::Value]) -> Result<RuleBasedHolidayProvider, ManagerError> {
        let provider = RuleBasedHolidayProvider::new();
        provider.calendars.insert_obj_from_json_vec(json_vec)?;
        Ok(provider)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<RuleBasedHolidayProvider, ManagerError> {
        let provider = RuleBasedHolidayProvider::new();
        provider.calendars.from_reader(file_path)?;
        Ok(provider)
    }

    pub fn insert(&self, country: impl Into<String>, calendar: RegionCalendar) {
        self.calendars.insert(country.into(), Arc::new(calendar));
    }
}

impl Default for RuleBasedHolidayProvider {
    fn default() -> Self {
        RuleBasedHolidayProvider::new()
    }
}

impl HolidayProvider for RuleBasedHolidayProvider {
    fn holidays(&self, country: &str, subdivision: Option<&str>, year: i32) -> Vec<HolidaySpan> {
        let Ok(calendar) = self.calendars.get(country) else {
            warn!("unknown country '{}', no holidays applied", country);
            return Vec::new();
        };
        let Some(rules) = calendar.rules_for(subdivision) else {
            warn!("unknown subdivision '{}' of '{}', no holidays applied", subdivision.unwrap_or_default(), country);
            return Vec::new();
        };

        let mut spans: Vec<HolidaySpan> = rules.iter().flat_map(|rule| rule.spans(year)).collect();
        spans.sort_by(|a, b| a.start().cmp(&b.start()).then_with(|| a.name().cmp(b.name())));
        spans
    }

    fn countries(&self) -> BTreeMap<String, String> {
        self.calendars
            .map()
            .iter()
            .map(|(code, calendar)| (code.clone(), calendar.display_name().to_owned()))
            .collect()
    }

    fn subdivisions(&self, country: &str) -> BTreeMap<String, String> {
        self.calendars
            .get(country)
            .map(|calendar| {
                calendar
                    .subdivisions()
                    .iter()
                    .map(|(code, sub)| (code.clone(), sub.display_name().to_owned()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
