//! Local time in Berlin without a timezone database.
//!
//! Germany follows the EU rule: CEST (UTC+2) from the last Sunday of March
//! 01:00 UTC until the last Sunday of October 01:00 UTC, CET (UTC+1) otherwise.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};

/// Refresh period for the clock widget.
pub const TICK_MS: u32 = 1000;

fn last_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let mut day = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    while day.weekday() != Weekday::Sun {
        day = day.pred_opt()?;
    }
    Some(day)
}

fn switch_instant(year: i32, month: u32) -> Option<DateTime<Utc>> {
    let naive = last_sunday(year, month)?.and_hms_opt(1, 0, 0)?;
    Some(Utc.from_utc_datetime(&naive))
}

pub fn is_summer_time(now: DateTime<Utc>) -> bool {
    let year = now.year();
    match (switch_instant(year, 3), switch_instant(year, 10)) {
        (Some(start), Some(end)) => now >= start && now < end,
        _ => false,
    }
}

/// UTC offset in hours.
pub fn berlin_offset_hours(now: DateTime<Utc>) -> i64 {
    if is_summer_time(now) {
        2
    } else {
        1
    }
}

pub fn zone_abbreviation(now: DateTime<Utc>) -> &'static str {
    if is_summer_time(now) {
        "CEST"
    } else {
        "CET"
    }
}

/// Wall clock date and time in Berlin.
pub fn berlin_local(now: DateTime<Utc>) -> NaiveDateTime {
    (now + Duration::hours(berlin_offset_hours(now))).naive_utc()
}

/// "HH:MM" wall clock time in Berlin.
pub fn berlin_time(now: DateTime<Utc>) -> String {
    berlin_local(now).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_winter_and_summer() {
        assert_eq!(berlin_time(at(2025, 1, 15, 12, 30)), "13:30");
        assert_eq!(berlin_time(at(2025, 7, 15, 12, 30)), "14:30");
        assert_eq!(zone_abbreviation(at(2025, 7, 15, 12, 30)), "CEST");
    }

    #[test]
    fn test_transition_boundaries() {
        // 2025: summer time from Mar 30 to Oct 26.
        assert!(!is_summer_time(at(2025, 3, 30, 0, 59)));
        assert!(is_summer_time(at(2025, 3, 30, 1, 0)));
        assert!(is_summer_time(at(2025, 10, 26, 0, 59)));
        assert!(!is_summer_time(at(2025, 10, 26, 1, 0)));
    }

    #[test]
    fn test_wraps_past_midnight() {
        assert_eq!(berlin_time(at(2025, 12, 31, 23, 15)), "00:15");
    }

    #[test]
    fn test_last_sunday() {
        assert_eq!(last_sunday(2024, 3), NaiveDate::from_ymd_opt(2024, 3, 31));
        assert_eq!(last_sunday(2024, 10), NaiveDate::from_ymd_opt(2024, 10, 27));
    }
}
