pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use error::{InvalidInput, SetupError};
pub use model::settings::UserSettings;
pub use model::stats::{LifeReport, LifeStats};
pub use repository::{FileSettingsRepository, SettingsRepository};
pub use service::calculator::{calculate, evaluate, project_hours, HourAllocation};
pub use service::events::{count_annual_event, count_full_moons, count_weekdays};
pub use service::messages::lifespan_message;
pub use service::settings_service::{SettingsService, SetupRequest};
pub use time::{parse_birth_date, parse_instant};
