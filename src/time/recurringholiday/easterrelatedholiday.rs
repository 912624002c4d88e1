use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::recurringholiday::RecurringHoliday;
use crate::time::utility::shift_days;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox
}

/// A fixed offset from Easter Sunday (Good Friday is -2, Whit Monday is 50).
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    easter_type: EasterType,
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub fn new(easter_type: EasterType, shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday { easter_type, shift_days }
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    /// Easter Sunday in the Gregorian calendar, for years 1583..=4099.
    pub fn easter_sunday(easter_type: EasterType, year: i32) -> Option<NaiveDate> {
        if !(1583..=4099).contains(&year) {
            return None;
        }

        let g = year % 19;

        let p = match easter_type {
            EasterType::Orthodox => {
                let i = (19 * g + 15) % 30;
                let j = (year + year / 4 + i) % 7;
                let e = if year <= 1600 {
                    10
                } else {
                    10 + year / 100 - 16 - (year / 100 - 16) / 4
                };
                i - j + e
            },
            EasterType::Western => {
                let c = year / 100;
                let c_div_4 = c / 4;
                let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
                let h_div_28 = h / 28;
                let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
                let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
                i - j
            }
        };

        // p may be negative (Easter before March 26), keep the arithmetic signed.
        let day = 1 + (p + 27 + (p + 6) / 40) % 31;
        let month = 3 + (p + 26) / 30;

        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> BTreeSet<NaiveDate> {
        EasterRelatedHoliday::easter_sunday(self.easter_type, year)
            .and_then(|easter| shift_days(easter, self.shift_days))
            .into_iter()
            .collect()
    }
}
