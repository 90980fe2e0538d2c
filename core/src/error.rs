//! Typed errors for lifecount-core.

/// Why a set of settings cannot produce live statistics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    /// No birth date has been configured yet.
    #[error("birth date is not set")]
    MissingBirthDate,

    /// The stored birth date is not a valid calendar date.
    #[error("invalid birth date: {input:?}")]
    UnparseableBirthDate {
        /// The rejected input.
        input: String,
    },

    /// Lifespan must be at least one year.
    #[error("lifespan must be positive, got {years}")]
    NonPositiveLifespan {
        /// The rejected lifespan.
        years: i32,
    },

    /// birth + lifespan falls outside the supported calendar range.
    #[error("lifespan of {years} years is out of range")]
    LifespanOutOfRange {
        /// The rejected lifespan.
        years: i32,
    },
}

/// Rejections raised while running first-time setup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("birth date is incomplete: year, month and day are required")]
    IncompleteBirthDate,

    #[error("invalid birth date: {input:?}")]
    InvalidBirthDate { input: String },

    #[error("birth date {date} is in the future")]
    FutureBirthDate { date: String },

    #[error("{field} must be a non-negative number of hours, got {value}")]
    InvalidDailyHours { field: &'static str, value: f64 },
}
