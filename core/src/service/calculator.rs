//! Life statistics calculator.
//!
//! A pure function of `(now, settings)`. Nothing here reads the clock; the
//! caller decides what "now" is, which keeps every result reproducible.

use chrono::{Datelike, NaiveDateTime, Weekday};
use tracing::{debug, warn};

use crate::error::InvalidInput;
use crate::model::settings::UserSettings;
use crate::model::stats::{LifeReport, LifeStats};
use crate::service::events::{
    count_annual_event, count_full_moons, count_weekdays, SPRING_DAY, SPRING_MONTH,
};
use crate::time::{add_years, millis_between, parse_birth_date, start_of_day, MILLIS_PER_SECOND};

const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_YEAR: f64 = 365.25;
const HOURS_PER_MOVIE: f64 = 2.0;
const HOURS_PER_BOOK: f64 = 10.0;

/// Computes the statistics for `settings` at `now`.
///
/// Invalid settings and an elapsed lifespan both yield [`LifeStats::dead`].
/// Use [`evaluate`] to tell them apart.
pub fn calculate(now: NaiveDateTime, settings: &UserSettings) -> LifeStats {
    evaluate(now, settings).into_stats()
}

/// Like [`calculate`], but reports why no live statistics are available.
pub fn evaluate(now: NaiveDateTime, settings: &UserSettings) -> LifeReport {
    let (birth, death) = match lifespan_bounds(settings) {
        Ok(bounds) => bounds,
        Err(reason) => {
            if let InvalidInput::UnparseableBirthDate { input } = &reason {
                warn!(birth_date = %input, "invalid birth date");
            }
            debug!(%reason, "settings rejected");
            return LifeReport::Invalid(reason);
        }
    };

    let total_millis = millis_between(birth, death);
    let used_millis = millis_between(birth, now);
    let remaining_millis = millis_between(now, death);

    if remaining_millis <= 0 {
        debug!(%death, "lifespan elapsed");
        return LifeReport::Expired;
    }

    let used_percentage =
        (used_millis as f64 / total_millis as f64 * 100.0).clamp(0.0, 100.0);

    let remaining_seconds = remaining_millis / MILLIS_PER_SECOND;
    let remaining_hours = remaining_seconds / 3600;
    let remaining_days = remaining_hours / 24;
    let remaining_weeks = remaining_days / 7;
    let remaining_years = (remaining_days as f64 / DAYS_PER_YEAR).floor() as i64;

    let remaining_springs = count_annual_event(now, death, SPRING_MONTH, SPRING_DAY);
    let remaining_birthdays = count_annual_event(now, death, birth.month(), birth.day());
    let remaining_sundays = count_weekdays(now, death, Weekday::Sun);
    let remaining_full_moons = count_full_moons(now, death);

    let allocation = project_hours(
        remaining_days,
        settings.daily_sleep_hours,
        settings.daily_work_hours,
    );

    LifeReport::Active(LifeStats {
        used_percentage,
        remaining_years,
        remaining_days,
        remaining_weeks,
        remaining_hours,
        remaining_seconds,
        remaining_springs,
        remaining_birthdays,
        remaining_sundays,
        remaining_full_moons,
        sleep_hours: allocation.sleep_hours,
        work_hours: allocation.work_hours,
        free_hours: allocation.free_hours,
        movies_watchable: allocation.movies_watchable,
        books_readable: allocation.books_readable,
    })
}

/// Birth and death instants for valid settings.
fn lifespan_bounds(settings: &UserSettings) -> Result<(NaiveDateTime, NaiveDateTime), InvalidInput> {
    if !settings.is_configured() {
        return Err(InvalidInput::MissingBirthDate);
    }

    let birth_date = parse_birth_date(&settings.birth_date).map_err(|_| {
        InvalidInput::UnparseableBirthDate {
            input: settings.birth_date.clone(),
        }
    })?;

    let years = settings.lifespan_years;
    if years <= 0 {
        return Err(InvalidInput::NonPositiveLifespan { years });
    }

    let death_date =
        add_years(birth_date, years).ok_or(InvalidInput::LifespanOutOfRange { years })?;

    Ok((start_of_day(birth_date), start_of_day(death_date)))
}

/// Remaining hours split by activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourAllocation {
    pub sleep_hours: f64,
    pub work_hours: f64,
    pub free_hours: f64,
    pub movies_watchable: i64,
    pub books_readable: i64,
}

/// Projects daily sleep/work rates over `remaining_days`.
///
/// Free time per day is clamped at zero; sleep and work totals are not
/// capped even when they add up to more than a day.
pub fn project_hours(remaining_days: i64, daily_sleep: f64, daily_work: f64) -> HourAllocation {
    let days = remaining_days as f64;
    let daily_free = (HOURS_PER_DAY - daily_sleep - daily_work).max(0.0);
    let free_hours = days * daily_free;

    HourAllocation {
        sleep_hours: days * daily_sleep,
        work_hours: days * daily_work,
        free_hours,
        movies_watchable: (free_hours / HOURS_PER_MOVIE).floor() as i64,
        books_readable: (free_hours / HOURS_PER_BOOK).floor() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        start_of_day(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_project_hours_typical_day() {
        let hours = project_hours(1000, 7.0, 8.0);
        assert_eq!(hours.sleep_hours, 7000.0);
        assert_eq!(hours.work_hours, 8000.0);
        assert_eq!(hours.free_hours, 9000.0);
        assert_eq!(hours.movies_watchable, 4500);
        assert_eq!(hours.books_readable, 900);
    }

    #[test]
    fn test_project_hours_overbooked_day() {
        let hours = project_hours(1000, 14.0, 14.0);
        assert_eq!(hours.free_hours, 0.0);
        assert_eq!(hours.sleep_hours, 14000.0);
        assert_eq!(hours.work_hours, 14000.0);
        assert_eq!(hours.movies_watchable, 0);
        assert_eq!(hours.books_readable, 0);
    }

    #[test]
    fn test_project_hours_fractional_rates() {
        let hours = project_hours(3, 7.5, 8.0);
        assert_eq!(hours.free_hours, 25.5);
        assert_eq!(hours.movies_watchable, 12);
        assert_eq!(hours.books_readable, 2);
    }

    #[test]
    fn test_missing_birth_date() {
        let report = evaluate(midnight(2024, 1, 1), &UserSettings::default());
        assert_eq!(report, LifeReport::Invalid(InvalidInput::MissingBirthDate));
    }

    #[test]
    fn test_unparseable_birth_date() {
        let settings = UserSettings::new("1990-13-01", 85);
        let report = evaluate(midnight(2024, 1, 1), &settings);
        assert_eq!(
            report,
            LifeReport::Invalid(InvalidInput::UnparseableBirthDate {
                input: "1990-13-01".to_string()
            })
        );
    }

    #[test]
    fn test_zero_lifespan() {
        let settings = UserSettings::new("1990-01-01", 0);
        let report = evaluate(midnight(1989, 1, 1), &settings);
        assert_eq!(
            report,
            LifeReport::Invalid(InvalidInput::NonPositiveLifespan { years: 0 })
        );
    }

    #[test]
    fn test_expired_exactly_at_death() {
        let settings = UserSettings::new("1990-01-01", 1);
        assert_eq!(evaluate(midnight(1991, 1, 1), &settings), LifeReport::Expired);
        assert!(evaluate(midnight(1990, 12, 31), &settings).is_active());
    }

    #[test]
    fn test_unborn_clamps_to_zero_percent() {
        let settings = UserSettings::new("2030-01-01", 80);
        let stats = calculate(midnight(2024, 1, 1), &settings);
        assert_eq!(stats.used_percentage, 0.0);
        assert!(stats.remaining_years > 80);
    }
}
