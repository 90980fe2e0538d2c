use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;

/// Parses a `YYYY-MM-DD` birth date. Full-width digits are accepted.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    let normalized = normalize_digits(input.trim());
    if normalized.is_empty() {
        return Err(anyhow!("Empty date string"));
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

/// Parses an instant given as `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`
/// or a bare date (midnight).
pub fn parse_instant(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(start_of_day(d));
    }
    Err(anyhow!("Could not parse instant: {}", input))
}

/// Maps full-width digits (U+FF10..U+FF19) to ASCII, leaves everything else alone.
pub fn normalize_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{FF10}'..='\u{FF19}' => {
                char::from_u32(c as u32 - 0xFF10 + '0' as u32).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Builds a calendar date, rolling overflowing days into the next month
/// (Feb 29 in a non-leap year becomes Mar 1).
pub fn ymd_rollover(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        return Some(date);
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(day as i64 - 1))
}

/// Adds whole calendar years, keeping month/day where the calendar allows.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year().checked_add(years)?;
    ymd_rollover(year, date.month(), date.day())
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The last whole second of `date`.
pub fn end_of_day(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_opt(23, 59, 59)
}

pub fn millis_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_milliseconds()
}
