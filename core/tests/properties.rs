//! Property tests for the calculator invariants.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use lifecount_core::{calculate, LifeStats, UserSettings};
use proptest::prelude::*;

fn birth_and_now(year: i32, month: u32, day: u32, offset_secs: i64) -> (String, NaiveDateTime) {
    let birth = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    let now = birth.and_hms_opt(0, 0, 0).unwrap() + Duration::seconds(offset_secs);
    (birth.format("%Y-%m-%d").to_string(), now)
}

proptest! {
    #[test]
    fn prop_used_percentage_is_bounded(
        year in 1900i32..2020,
        month in 1u32..=12,
        day in 1u32..=28,
        lifespan in 1i32..=110,
        offset_secs in -1_000_000i64..4_000_000_000,
    ) {
        let (birth, now) = birth_and_now(year, month, day, offset_secs);
        let stats = calculate(now, &UserSettings::new(birth, lifespan));
        prop_assert!((0.0..=100.0).contains(&stats.used_percentage));
    }

    #[test]
    fn prop_used_percentage_is_monotonic(
        year in 1900i32..2020,
        month in 1u32..=12,
        day in 1u32..=28,
        lifespan in 1i32..=110,
        offset_secs in 0i64..3_500_000_000,
        step_secs in 0i64..100_000_000,
    ) {
        let (birth, now) = birth_and_now(year, month, day, offset_secs);
        let settings = UserSettings::new(birth, lifespan);
        let earlier = calculate(now, &settings);
        let later = calculate(now + Duration::seconds(step_secs), &settings);
        prop_assert!(earlier.used_percentage <= later.used_percentage);
    }

    #[test]
    fn prop_unit_and_hour_relationships(
        year in 1950i32..2020,
        month in 1u32..=12,
        day in 1u32..=28,
        lifespan in 1i32..=110,
        offset_secs in 0i64..3_000_000_000,
        sleep in 0u32..=16,
        work in 0u32..=16,
    ) {
        let (birth, now) = birth_and_now(year, month, day, offset_secs);
        let (sleep, work) = (sleep as f64, work as f64);
        let settings = UserSettings::new(birth, lifespan).with_daily_hours(sleep, work);
        let stats = calculate(now, &settings);

        if stats != LifeStats::dead() {
            prop_assert_eq!(stats.remaining_hours, stats.remaining_seconds / 3600);
            prop_assert_eq!(stats.remaining_days, stats.remaining_hours / 24);
            prop_assert_eq!(stats.remaining_weeks, stats.remaining_days / 7);

            let days = stats.remaining_days as f64;
            prop_assert_eq!(stats.free_hours, days * (24.0 - sleep - work).max(0.0));
            prop_assert_eq!(stats.sleep_hours, days * sleep);
            prop_assert_eq!(stats.work_hours, days * work);
            prop_assert_eq!(stats.movies_watchable, (stats.free_hours / 2.0).floor() as i64);
            prop_assert_eq!(stats.books_readable, (stats.free_hours / 10.0).floor() as i64);

            prop_assert!(stats.remaining_birthdays <= lifespan as i64);
            prop_assert!(stats.remaining_springs <= lifespan as i64 + 1);
        }
    }
}
