use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::ThemeId;

pub const CURRENT_VERSION: u32 = 1;
const SETTINGS_FILENAME: &str = "config.yaml";
const APP_NAME: &str = "pagepick";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_theme")]
    pub theme: String,

    /// Print recognized word text inside regions that are wide enough
    #[serde(default = "default_true")]
    pub show_word_text: bool,
}

fn default_true() -> bool {
    true
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

fn default_theme() -> String {
    ThemeId::default().name().to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            theme: default_theme(),
            show_word_text: true,
        }
    }
}

impl Settings {
    pub fn theme_id(&self) -> ThemeId {
        ThemeId::from_name(&self.theme).unwrap_or_else(|| {
            warn!("Unknown theme {:?}, falling back to default", self.theme);
            ThemeId::default()
        })
    }
}

pub fn preferred_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join(APP_NAME).join(SETTINGS_FILENAME))
}

/// Load settings from `explicit` or the default location. A missing default
/// file is created; any failure falls back to defaults.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    if let Some(path) = explicit {
        return load_settings_from_path(path).unwrap_or_else(|e| {
            error!("Failed to load settings from {path:?}: {e}");
            Settings::default()
        });
    }

    let Some(path) = preferred_config_path() else {
        warn!("Could not determine config directory, using default settings");
        return Settings::default();
    };

    if path.exists() {
        load_settings_from_path(&path).unwrap_or_else(|e| {
            error!("Failed to load settings from {path:?}: {e}");
            Settings::default()
        })
    } else {
        info!("Settings file not found, creating with defaults at {path:?}");
        let settings = Settings::default();
        if let Err(e) = save_settings_to_file(&settings, &path) {
            error!("Failed to save settings to {path:?}: {e}");
        }
        settings
    }
}

pub fn load_settings_from_path(path: &Path) -> anyhow::Result<Settings> {
    let content = fs::read_to_string(path)?;
    let mut settings: Settings = serde_yaml::from_str(&content)?;
    debug!("Loaded settings from {path:?}");

    if settings.version < CURRENT_VERSION {
        migrate_settings(&mut settings);
        save_settings_to_file(&settings, path)?;
    }
    Ok(settings)
}

fn migrate_settings(settings: &mut Settings) {
    info!(
        "Migrating settings from v{} to v{}",
        settings.version, CURRENT_VERSION
    );
    settings.version = CURRENT_VERSION;
}

pub fn save_settings_to_file(settings: &Settings, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, serde_yaml::to_string(settings)?)?;
    debug!("Saved settings to {path:?}");
    Ok(())
}
