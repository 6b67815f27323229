use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::settings::config::Settings;

/// Loads settings once at startup. There is no runtime mutation: users edit
/// the TOML file directly and restart.
pub struct SettingsManager {
    settings_path: PathBuf,
    settings: Settings,
}

impl SettingsManager {
    /// Settings manager rooted at the default data directory
    /// (~/.voicemark/settings.toml).
    pub fn new() -> Result<Self> {
        Self::from_path(Self::default_settings_path()?)
    }

    /// Settings manager for a specific file. A missing file is created with
    /// defaults so the user has something to edit.
    pub fn from_path(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            write_settings(&path, &Settings::default())?;
        }

        let settings = Self::load_from_file_with_backup(&path)?;

        Ok(Self {
            settings_path: path,
            settings,
        })
    }

    fn default_settings_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".voicemark").join("settings.toml"))
    }

    /// Load settings from a TOML file, moving a corrupted file aside and
    /// starting over from defaults rather than refusing to boot.
    fn load_from_file_with_backup(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        match toml::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(_) => {
                let backup_path = path.with_extension("toml.backup");
                fs::rename(path, &backup_path).with_context(|| {
                    format!(
                        "Failed to back up corrupted settings to {}",
                        backup_path.display()
                    )
                })?;

                let defaults = Settings::default();
                write_settings(path, &defaults)?;
                Ok(defaults)
            }
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn path(&self) -> &Path {
        &self.settings_path
    }
}

fn write_settings(path: &Path, settings: &Settings) -> Result<()> {
    let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;
    Ok(())
}
