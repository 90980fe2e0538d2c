use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::error::SetupError;
use crate::model::settings::{
    UserSettings, DEFAULT_SLEEP_HOURS, DEFAULT_WORK_HOURS, MAX_LIFESPAN_YEARS, MIN_LIFESPAN_YEARS,
};
use crate::repository::SettingsRepository;
use crate::time::{normalize_digits, parse_birth_date};

/// Lifespan assumed when first-time setup does not specify one.
pub const SETUP_LIFESPAN_YEARS: i32 = 90;

/// Input collected by first-time setup. Components are raw user text.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupRequest {
    pub year: String,
    pub month: String,
    pub day: String,
    pub daily_sleep_hours: f64,
    pub daily_work_hours: f64,
    pub lifespan_years: i32,
}

impl SetupRequest {
    pub fn new(year: &str, month: &str, day: &str) -> Self {
        Self {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
            daily_sleep_hours: DEFAULT_SLEEP_HOURS,
            daily_work_hours: DEFAULT_WORK_HOURS,
            lifespan_years: SETUP_LIFESPAN_YEARS,
        }
    }

    /// Splits a `Y-M-D` string (full-width digits allowed) into components.
    pub fn from_date_str(input: &str) -> Result<Self, SetupError> {
        let normalized = normalize_digits(input.trim());
        let parts: Vec<&str> = normalized.split(['-', '/']).collect();
        match parts.as_slice() {
            [y, m, d] => Ok(Self::new(y, m, d)),
            _ => Err(SetupError::InvalidBirthDate {
                input: input.trim().to_string(),
            }),
        }
    }
}

/// Pads and validates setup components into a `YYYY-MM-DD` string.
pub fn compose_birth_date(year: &str, month: &str, day: &str) -> Result<String, SetupError> {
    let year = normalize_digits(year.trim());
    let month = normalize_digits(month.trim());
    let day = normalize_digits(day.trim());
    if year.is_empty() || month.is_empty() || day.is_empty() {
        return Err(SetupError::IncompleteBirthDate);
    }

    let birth_date = format!("{year:0>4}-{month:0>2}-{day:0>2}");
    parse_birth_date(&birth_date).map_err(|_| SetupError::InvalidBirthDate {
        input: birth_date.clone(),
    })?;
    Ok(birth_date)
}

fn check_hours(field: &'static str, value: f64) -> Result<(), SetupError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SetupError::InvalidDailyHours { field, value })
    }
}

pub struct SettingsService<R: SettingsRepository> {
    repo: R,
}

impl<R: SettingsRepository> SettingsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stored settings, or the defaults when nothing is stored.
    pub fn current(&self) -> Result<UserSettings> {
        Ok(self.repo.load()?.unwrap_or_default())
    }

    pub fn is_configured(&self) -> Result<bool> {
        Ok(self.current()?.is_configured())
    }

    /// Validates first-time setup input against `today` and stores it.
    pub fn setup(&self, request: SetupRequest, today: NaiveDate) -> Result<UserSettings> {
        let birth_date = compose_birth_date(&request.year, &request.month, &request.day)?;
        if parse_birth_date(&birth_date)? > today {
            return Err(SetupError::FutureBirthDate { date: birth_date }.into());
        }
        check_hours("daily sleep", request.daily_sleep_hours)?;
        check_hours("daily work", request.daily_work_hours)?;

        let settings = UserSettings {
            birth_date,
            lifespan_years: clamp_lifespan(request.lifespan_years),
            daily_sleep_hours: request.daily_sleep_hours,
            daily_work_hours: request.daily_work_hours,
        };
        self.repo.save(&settings)?;
        info!(birth_date = %settings.birth_date, "setup complete");
        Ok(settings)
    }

    /// Stores a new lifespan, clamped to the slider range.
    pub fn update_lifespan(&self, years: i32) -> Result<UserSettings> {
        let mut settings = self.current()?;
        settings.lifespan_years = clamp_lifespan(years);
        self.repo.save(&settings)?;
        info!(lifespan_years = settings.lifespan_years, "lifespan updated");
        Ok(settings)
    }

    /// Moves the lifespan by `delta` years from its current value.
    pub fn adjust_lifespan(&self, delta: i32) -> Result<UserSettings> {
        let current = self.current()?.lifespan_years;
        self.update_lifespan(current.saturating_add(delta))
    }

    /// Puts the default record back in place.
    pub fn reset(&self) -> Result<UserSettings> {
        let settings = UserSettings::default();
        self.repo.save(&settings)?;
        info!("settings reset");
        Ok(settings)
    }
}

pub fn clamp_lifespan(years: i32) -> i32 {
    years.clamp(MIN_LIFESPAN_YEARS, MAX_LIFESPAN_YEARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockSettingsRepo {
        stored: RefCell<Option<UserSettings>>,
    }

    impl SettingsRepository for MockSettingsRepo {
        fn load(&self) -> Result<Option<UserSettings>> {
            Ok(self.stored.borrow().clone())
        }
        fn save(&self, settings: &UserSettings) -> Result<()> {
            *self.stored.borrow_mut() = Some(settings.clone());
            Ok(())
        }
        fn clear(&self) -> Result<()> {
            *self.stored.borrow_mut() = None;
            Ok(())
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_current_defaults_when_empty() {
        let service = SettingsService::new(MockSettingsRepo::default());
        assert_eq!(service.current().unwrap(), UserSettings::default());
        assert!(!service.is_configured().unwrap());
    }

    #[test]
    fn test_setup_pads_and_stores() {
        let service = SettingsService::new(MockSettingsRepo::default());
        let settings = service.setup(SetupRequest::new("1990", "1", "2"), today()).unwrap();
        assert_eq!(settings.birth_date, "1990-01-02");
        assert_eq!(settings.lifespan_years, 90);
        assert_eq!(settings.daily_sleep_hours, 7.0);
        assert_eq!(settings.daily_work_hours, 8.0);
        assert_eq!(service.current().unwrap(), settings);
        assert!(service.is_configured().unwrap());
    }

    #[test]
    fn test_setup_accepts_full_width_digits() {
        let request = SetupRequest::from_date_str("１９９０-６-１４").unwrap();
        let service = SettingsService::new(MockSettingsRepo::default());
        let settings = service.setup(request, today()).unwrap();
        assert_eq!(settings.birth_date, "1990-06-14");
    }

    #[test]
    fn test_setup_rejects_bad_dates() {
        assert_eq!(
            compose_birth_date("1990", "", "1"),
            Err(SetupError::IncompleteBirthDate)
        );
        assert_eq!(
            compose_birth_date("1990", "2", "30"),
            Err(SetupError::InvalidBirthDate {
                input: "1990-02-30".to_string()
            })
        );
    }

    #[test]
    fn test_date_str_needs_exactly_three_parts() {
        assert_eq!(
            SetupRequest::from_date_str("1990-01-01-"),
            Err(SetupError::InvalidBirthDate {
                input: "1990-01-01-".to_string()
            })
        );
        assert_eq!(
            SetupRequest::from_date_str("1990-01"),
            Err(SetupError::InvalidBirthDate {
                input: "1990-01".to_string()
            })
        );
        assert_eq!(
            SetupRequest::from_date_str("1990/1/2").map(|r| (r.year, r.month, r.day)),
            Ok(("1990".to_string(), "1".to_string(), "2".to_string()))
        );
    }

    #[test]
    fn test_setup_rejects_future_birth_date() {
        let service = SettingsService::new(MockSettingsRepo::default());
        let err = service
            .setup(SetupRequest::new("2030", "1", "1"), today())
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<SetupError>(),
            Some(&SetupError::FutureBirthDate {
                date: "2030-01-01".to_string()
            })
        );
        assert_eq!(service.current().unwrap(), UserSettings::default());
    }

    #[test]
    fn test_setup_rejects_negative_hours() {
        let service = SettingsService::new(MockSettingsRepo::default());
        let mut request = SetupRequest::new("1990", "1", "1");
        request.daily_sleep_hours = -1.0;
        let err = service.setup(request, today()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SetupError>(),
            Some(SetupError::InvalidDailyHours { field: "daily sleep", .. })
        ));
    }

    #[test]
    fn test_update_lifespan_clamps() {
        let service = SettingsService::new(MockSettingsRepo::default());
        service.setup(SetupRequest::new("1990", "1", "1"), today()).unwrap();

        assert_eq!(service.update_lifespan(150).unwrap().lifespan_years, 110);
        assert_eq!(service.update_lifespan(-5).unwrap().lifespan_years, 0);
        assert_eq!(service.update_lifespan(72).unwrap().lifespan_years, 72);
        assert_eq!(service.adjust_lifespan(1).unwrap().lifespan_years, 73);
        // The birth date survives lifespan changes.
        assert_eq!(service.current().unwrap().birth_date, "1990-01-01");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let service = SettingsService::new(MockSettingsRepo::default());
        service.setup(SetupRequest::new("1990", "1", "1"), today()).unwrap();
        assert_eq!(service.reset().unwrap(), UserSettings::default());
        assert_eq!(service.current().unwrap(), UserSettings::default());
    }
}
