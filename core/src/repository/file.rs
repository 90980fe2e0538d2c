use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::model::settings::UserSettings;
use crate::repository::traits::SettingsRepository;

/// Fixed storage key for the settings record.
pub const SETTINGS_KEY: &str = "life-counter-settings";
const DEFAULT_DIR_NAME: &str = ".lifecount";

#[derive(Clone)]
pub struct FileSettingsRepository {
    file_path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        path.push(format!("{SETTINGS_KEY}.json"));

        Ok(FileSettingsRepository { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl SettingsRepository for FileSettingsRepository {
    fn load(&self) -> Result<Option<UserSettings>> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let settings = serde_json::from_reader(reader)
            .with_context(|| format!("Corrupt settings file {}", self.file_path.display()))?;
        Ok(Some(settings))
    }

    fn save(&self, settings: &UserSettings) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, settings)?;
        writer.flush()?;
        debug!(path = %self.file_path.display(), "settings saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)?;
        }
        Ok(())
    }
}
