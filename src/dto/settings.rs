use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::SettingsError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shown before each interactive read
    pub prompt: String,
    /// Give up after this many rejected entries; unbounded when absent
    pub max_attempts: Option<u32>,
    /// Used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            prompt: "Please enter an amount to convert: ".to_string(),
            max_attempts: None,
            log_level: "warn".to_string(),
        }
    }
}

/// Loads settings from a YAML file. A missing or empty file means defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }

    Ok(serde_yaml::from_str(&contents)?)
}
