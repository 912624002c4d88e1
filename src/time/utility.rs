use chrono::{Days, NaiveDate};

pub const ONE_DAY: Days = Days::new(1);

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Moves `d` by a signed number of calendar days; `None` past chrono's date limits.
#[inline]
pub fn shift_days(d: NaiveDate, n: i64) -> Option<NaiveDate> {
    if n >= 0 {
        d.checked_add_days(Days::new(n as u64))
    } else {
        d.checked_sub_days(Days::new(n.unsigned_abs()))
    }
}

/// Inclusive day count between two dates; zero when `end` precedes `start`.
#[inline]
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    ((end - start).num_days() + 1).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_years() {
        assert!(is_leap(2024));
        assert!(!is_leap(2025));
        assert!(!is_leap(1900));
        assert!(is_leap(2000));
        assert_eq!(days_of_month(2024, 2), 29);
        assert_eq!(days_of_month(2025, 2), 28);
        assert_eq!(days_of_month(2025, 12), 31);
    }

    #[test]
    fn shifting_in_both_directions() {
        assert_eq!(shift_days(date(2025, 1, 1), -1), Some(date(2024, 12, 31)));
        assert_eq!(shift_days(date(2025, 1, 1), 31), Some(date(2025, 2, 1)));
        assert_eq!(shift_days(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn inclusive_day_count() {
        assert_eq!(inclusive_days(date(2025, 1, 4), date(2025, 1, 12)), 9);
        assert_eq!(inclusive_days(date(2025, 1, 4), date(2025, 1, 4)), 1);
        assert_eq!(inclusive_days(date(2025, 1, 5), date(2025, 1, 4)), 0);
    }
}
