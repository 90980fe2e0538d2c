use crate::model::settings::UserSettings;
use anyhow::Result;

pub trait SettingsRepository {
    /// `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<UserSettings>>;
    fn save(&self, settings: &UserSettings) -> Result<()>;
    fn clear(&self) -> Result<()>;
}
