use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::CalendarSettings;

const CONFIG_FILE: &str = "config.toml";

/// Loads and stores [`CalendarSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the platform config directory, if one can be resolved.
    pub fn with_default_path() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "taskcalendar", "task-calendar")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, using defaults when the file does not exist yet.
    ///
    /// Values that parse but fail validation are replaced by defaults with a
    /// warning; a file that does not parse is an error.
    pub fn load(&self) -> Result<CalendarSettings> {
        if !self.path.exists() {
            log::debug!("No settings at {}; using defaults", self.path.display());
            return Ok(CalendarSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: CalendarSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;

        if let Err(err) = settings.validate() {
            log::warn!(
                "Invalid settings in {}: {}; using defaults",
                self.path.display(),
                err
            );
            return Ok(CalendarSettings::default());
        }

        log::info!(
            "Loaded settings: hour_height_px={}, default_event_minutes={}",
            settings.hour_height_px,
            settings.default_event_minutes
        );
        Ok(settings)
    }

    pub fn save(&self, settings: &CalendarSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}
