use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Snapshot of the remaining-life statistics for a single instant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LifeStats {
    pub used_percentage: f64,

    pub remaining_years: i64,
    pub remaining_days: i64,
    pub remaining_weeks: i64,
    pub remaining_hours: i64,
    pub remaining_seconds: i64,

    // Experiences
    pub remaining_springs: i64,
    pub remaining_birthdays: i64,
    pub remaining_sundays: i64,
    pub remaining_full_moons: i64,

    // Cumulative hours over the remaining days, not daily rates.
    pub sleep_hours: f64,
    pub work_hours: f64,
    pub free_hours: f64,

    // Metaphors
    pub movies_watchable: i64,
    pub books_readable: i64,
}

impl LifeStats {
    /// The terminal record: 100% used, everything else zero.
    pub fn dead() -> Self {
        Self {
            used_percentage: 100.0,
            remaining_years: 0,
            remaining_days: 0,
            remaining_weeks: 0,
            remaining_hours: 0,
            remaining_seconds: 0,
            remaining_springs: 0,
            remaining_birthdays: 0,
            remaining_sundays: 0,
            remaining_full_moons: 0,
            sleep_hours: 0.0,
            work_hours: 0.0,
            free_hours: 0.0,
            movies_watchable: 0,
            books_readable: 0,
        }
    }

    pub fn is_dead(&self) -> bool {
        *self == Self::dead()
    }
}

/// Outcome of evaluating a set of settings at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub enum LifeReport {
    Active(LifeStats),
    /// The assumed lifespan has already elapsed.
    Expired,
    Invalid(InvalidInput),
}

impl LifeReport {
    /// Statistics to render. Non-active outcomes collapse to [`LifeStats::dead`].
    pub fn stats(&self) -> LifeStats {
        match self {
            LifeReport::Active(stats) => stats.clone(),
            LifeReport::Expired | LifeReport::Invalid(_) => LifeStats::dead(),
        }
    }

    pub fn into_stats(self) -> LifeStats {
        match self {
            LifeReport::Active(stats) => stats,
            LifeReport::Expired | LifeReport::Invalid(_) => LifeStats::dead(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, LifeReport::Active(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_record_shape() {
        let dead = LifeStats::dead();
        assert_eq!(dead.used_percentage, 100.0);
        assert_eq!(dead.remaining_seconds, 0);
        assert_eq!(dead.free_hours, 0.0);
        assert!(dead.is_dead());
    }

    #[test]
    fn test_non_active_reports_render_dead_record() {
        assert_eq!(LifeReport::Expired.stats(), LifeStats::dead());
        let invalid = LifeReport::Invalid(InvalidInput::MissingBirthDate);
        assert_eq!(invalid.stats(), LifeStats::dead());
        assert!(!invalid.is_active());
    }

    #[test]
    fn test_serializes_with_camel_case() {
        let json = serde_json::to_value(LifeStats::dead()).unwrap();
        assert_eq!(json["usedPercentage"], 100.0);
        assert_eq!(json["remainingFullMoons"], 0);
        assert_eq!(json["moviesWatchable"], 0);
    }
}
