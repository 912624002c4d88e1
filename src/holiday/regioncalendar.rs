use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{Days, NaiveDate, NaiveTime, Weekday};
use serde::Deserialize;

use crate::holiday::holidayprovider::HolidaySpan;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustment;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::oneoffholiday::OneOffHoliday;
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterType,
    EasterRelatedHoliday
};

/// A named recurrence lasting `duration_days` whole days from each occurrence.
#[derive(Clone)]
pub struct HolidayRule {
    name: String,
    duration_days: u32,
    recurrence: Arc<dyn RecurringHoliday>
}

impl HolidayRule {
    pub fn new(name: impl Into<String>, duration_days: u32, recurrence: Arc<dyn RecurringHoliday>) -> HolidayRule {
        HolidayRule {
            name: name.into(),
            duration_days: duration_days.max(1),
            recurrence
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn spans(&self, year: i32) -> Vec<HolidaySpan> {
        self.recurrence
            .get_holiday(year)
            .into_iter()
            .filter_map(|d| {
                let end = d.checked_add_days(Days::new(self.duration_days as u64))?;
                Some(HolidaySpan::new(
                    d.and_time(NaiveTime::MIN),
                    end.and_time(NaiveTime::MIN),
                    self.name.clone()
                ))
            })
            .collect()
    }
}

#[derive(Clone)]
pub struct SubdivisionCalendar {
    display_name: String,
    rules: Vec<HolidayRule>
}

impl SubdivisionCalendar {
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }
}

/// Holiday rules of one country; subdivisions add their own rules on top.
#[derive(Clone)]
pub struct RegionCalendar {
    display_name: String,
    rules: Vec<HolidayRule>,
    subdivisions: BTreeMap<String, SubdivisionCalendar>
}

impl RegionCalendar {
    pub fn new(display_name: impl Into<String>, rules: Vec<HolidayRule>) -> RegionCalendar {
        RegionCalendar {
            display_name: display_name.into(),
            rules,
            subdivisions: BTreeMap::new()
        }
    }

    pub fn with_subdivision(mut self, code: impl Into<String>, display_name: impl Into<String>, rules: Vec<HolidayRule>) -> RegionCalendar {
        self.subdivisions.insert(code.into(), SubdivisionCalendar {
            display_name: display_name.into(),
            rules
        });
        self
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn subdivisions(&self) -> &BTreeMap<String, SubdivisionCalendar> {
        &self.subdivisions
    }

    /// Rules in force for the country, extended by the subdivision's when it is known.
    /// `None` when the subdivision code is not defined for this country.
    pub fn rules_for(&self, subdivision: Option<&str>) -> Option<Vec<&HolidayRule>> {
        let mut rules: Vec<&HolidayRule> = self.rules.iter().collect();
        if let Some(code) = subdivision {
            let sub = self.subdivisions.get(code)?;
            rules.extend(sub.rules().iter());
        }
        Some(rules)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON loading
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    easter_type: EasterType,
    shift_days: i64
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday,
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32,
    #[serde(default)]
    weekend_adjustment_map: HashMap<Weekday, WeekendAdjustment>
}

#[derive(Deserialize)]
struct OneOffHolidayJsonProp {
    date: NaiveDate
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekday,
    OneOff
}

#[derive(Deserialize)]
struct HolidayRuleJsonProp {
    name: String,
    holiday_type: HolidayType,
    #[serde(default = "default_duration_days")]
    duration_days: u32
}

fn default_duration_days() -> u32 {
    1
}

fn get_recurrence_from_json(name: &str, holiday_type: HolidayType, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let recurrence: Arc<dyn RecurringHoliday> = match holiday_type {
        HolidayType::EasterRelated => {
            let prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
            Arc::new(EasterRelatedHoliday::new(prop.easter_type, prop.shift_days))
        },
        HolidayType::FixedDate => {
            let prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
            Arc::new(FixedDateHoliday::new(prop.month, prop.day, &prop.weekend_adjustment_map)
                .ok_or_else(|| ManagerError::invalid_rule(name, format!("no such day {}/{}", prop.month, prop.day)))?)
        },
        HolidayType::NthWeekday => {
            let prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
            Arc::new(NthWeekdayHoliday::new(prop.month, prop.n, prop.weekday)
                .ok_or_else(|| ManagerError::invalid_rule(name, "month must be 1-12 and n 1-5"))?)
        },
        HolidayType::LastWeekday => {
            let prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
            Arc::new(LastWeekdayHoliday::new(prop.month, prop.weekday)
                .ok_or_else(|| ManagerError::invalid_rule(name, "month must be 1-12"))?)
        },
        HolidayType::OneOff => {
            let prop: OneOffHolidayJsonProp = parse_json_value(json)?;
            Arc::new(OneOffHoliday::new(prop.date))
        }
    };
    Ok(recurrence)
}

pub fn get_holiday_rule_from_json(json: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let prop: HolidayRuleJsonProp = parse_json_value(json.clone())?;
    if prop.duration_days == 0 {
        return Err(ManagerError::invalid_rule(&prop.name, "duration_days must be positive"));
    }
    let recurrence = get_recurrence_from_json(&prop.name, prop.holiday_type, json)?;
    Ok(HolidayRule::new(prop.name, prop.duration_days, recurrence))
}

fn get_rules_from_json(json_vec: Vec<serde_json::Value>) -> Result<Vec<HolidayRule>, ManagerError> {
    json_vec.into_iter().map(get_holiday_rule_from_json).collect()
}

#[derive(Deserialize)]
struct SubdivisionJsonProp {
    name: String,
    display_name: String,
    #[serde(default)]
    holidays: Vec<serde_json::Value>
}

#[derive(Deserialize)]
struct RegionCalendarJsonProp {
    display_name: String,
    holidays: Vec<serde_json::Value>,
    #[serde(default)]
    subdivisions: Vec<SubdivisionJsonProp>
}

/// Builds a country calendar from its JSON definition; the registry keys it by `name`.
pub fn get_region_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<RegionCalendar>, ManagerError> {
    let prop: RegionCalendarJsonProp = parse_json_value(json_value)?;
    let mut calendar = RegionCalendar::new(prop.display_name, get_rules_from_json(prop.holidays)?);
    for sub in prop.subdivisions {
        let rules = get_rules_from_json(sub.holidays)?;
        calendar = calendar.with_subdivision(sub.name, sub.display_name, rules);
    }
    Ok(Arc::new(calendar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rule_spans_cover_duration() {
        let rule = get_holiday_rule_from_json(json!({
            "name": "Christmas",
            "holiday_type": "FixedDate",
            "month": 12,
            "day": 25,
            "duration_days": 2
        })).unwrap();
        assert_eq!(rule.name(), "Christmas");
        assert_eq!(rule.duration_days(), 2);
        let spans = rule.spans(2025);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start().date(), date(2025, 12, 25));
        assert_eq!(spans[0].end().date(), date(2025, 12, 27));
        assert_eq!(spans[0].name(), "Christmas");
    }

    #[test]
    fn invalid_rules_are_rejected() {
        let bad_day = get_holiday_rule_from_json(json!({
            "name": "Nowhere", "holiday_type": "FixedDate", "month": 2, "day": 30
        }));
        assert!(matches!(bad_day, Err(ManagerError::InvalidHolidayRule { .. })));

        let bad_n = get_holiday_rule_from_json(json!({
            "name": "Sixth Monday", "holiday_type": "NthWeekday", "month": 1, "n": 6, "weekday": "Mon"
        }));
        assert!(bad_n.is_err());

        let zero = get_holiday_rule_from_json(json!({
            "name": "Blink", "holiday_type": "OneOff", "date": "2025-03-03", "duration_days": 0
        }));
        assert!(zero.is_err());
    }

    #[test]
    fn subdivision_rules_extend_country_rules() {
        let calendar = get_region_calendar_from_json(json!({
            "name": "DE",
            "display_name": "Germany",
            "holidays": [
                {"name": "Neujahr", "holiday_type": "FixedDate", "month": 1, "day": 1}
            ],
            "subdivisions": [
                {"name": "BY", "display_name": "Bayern", "holidays": [
                    {"name": "Heilige Drei Könige", "holiday_type": "FixedDate", "month": 1, "day": 6}
                ]}
            ]
        })).unwrap();

        assert_eq!(calendar.display_name(), "Germany");
        assert_eq!(calendar.rules_for(None).unwrap().len(), 1);
        assert_eq!(calendar.rules_for(Some("BY")).unwrap().len(), 2);
        assert!(calendar.rules_for(Some("XX")).is_none());
        let bavaria = &calendar.subdivisions()["BY"];
        assert_eq!(bavaria.display_name(), "Bayern");
        assert_eq!(bavaria.rules()[0].name(), "Heilige Drei Könige");
    }
}
