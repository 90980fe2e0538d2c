//! Counters for recurring calendar events between two instants.
//!
//! These are closed-form approximations. Annual events are placed at the
//! last second of their day, weekdays are counted from the first matching
//! midnight, and full moons are stepped from a single known full moon by
//! the mean synodic month. None of this is ephemeris-accurate.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use crate::time::{end_of_day, millis_between, start_of_day, ymd_rollover, MILLIS_PER_WEEK};

/// Spring is counted on March 20th.
pub const SPRING_MONTH: u32 = 3;
pub const SPRING_DAY: u32 = 20;

/// Mean synodic month, 29.53059 days.
pub const SYNODIC_MONTH_MS: i64 = 2_551_442_976;

/// A known full moon: 2024-01-25 12:00:00.
pub fn reference_full_moon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 25)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("reference full moon is a valid date")
}

/// Counts how many times `month`/`day` falls strictly between `start` and `end`.
///
/// Each year from `start`'s year through `end`'s year is checked once, with
/// the occurrence placed at 23:59:59. Dates that do not exist in a given
/// year roll over (Feb 29 becomes Mar 1).
pub fn count_annual_event(start: NaiveDateTime, end: NaiveDateTime, month: u32, day: u32) -> i64 {
    let mut count = 0;
    for year in start.year()..=end.year() {
        let Some(occurrence) = ymd_rollover(year, month, day).and_then(end_of_day) else {
            continue;
        };
        if occurrence > start && occurrence < end {
            count += 1;
        }
    }
    count
}

/// Counts occurrences of `weekday` from `start`'s day up to (not including) `end`.
///
/// `start` is normalised to midnight first, so if today is the target
/// weekday it is counted as one remaining occurrence.
pub fn count_weekdays(start: NaiveDateTime, end: NaiveDateTime, weekday: Weekday) -> i64 {
    let mut current = start_of_day(start.date());
    while current.weekday() != weekday {
        match current.checked_add_signed(Duration::days(1)) {
            Some(next) => current = next,
            None => return 0,
        }
    }

    if current >= end {
        return 0;
    }

    // The first match, plus every further week that still starts before `end`.
    (millis_between(current, end) - 1) / MILLIS_PER_WEEK + 1
}

/// Counts full moons after `start` and before `end`.
pub fn count_full_moons(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let reference = reference_full_moon();
    let cycles = millis_between(reference, start).div_euclid(SYNODIC_MONTH_MS) + 1;

    let Some(first_moon) =
        reference.checked_add_signed(Duration::milliseconds(cycles * SYNODIC_MONTH_MS))
    else {
        return 0;
    };

    if first_moon >= end {
        return 0;
    }

    (millis_between(first_moon, end) - 1) / SYNODIC_MONTH_MS + 1
}
