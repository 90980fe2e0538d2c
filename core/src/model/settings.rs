use serde::{Deserialize, Serialize};

pub const DEFAULT_LIFESPAN_YEARS: i32 = 85;
pub const DEFAULT_SLEEP_HOURS: f64 = 7.0;
pub const DEFAULT_WORK_HOURS: f64 = 8.0;

/// Bounds of the lifespan slider.
pub const MIN_LIFESPAN_YEARS: i32 = 0;
pub const MAX_LIFESPAN_YEARS: i32 = 110;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    // Kept as the raw "YYYY-MM-DD" string; empty until first-time setup.
    // The calculator is the one place that decides whether it parses.
    pub birth_date: String,
    pub lifespan_years: i32,
    pub daily_sleep_hours: f64,
    pub daily_work_hours: f64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            birth_date: String::new(),
            lifespan_years: DEFAULT_LIFESPAN_YEARS,
            daily_sleep_hours: DEFAULT_SLEEP_HOURS,
            daily_work_hours: DEFAULT_WORK_HOURS,
        }
    }
}

impl UserSettings {
    pub fn new(birth_date: impl Into<String>, lifespan_years: i32) -> Self {
        Self {
            birth_date: birth_date.into(),
            lifespan_years,
            ..Self::default()
        }
    }

    pub fn with_daily_hours(mut self, sleep: f64, work: f64) -> Self {
        self.daily_sleep_hours = sleep;
        self.daily_work_hours = work;
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.birth_date.trim().is_empty()
    }
}
