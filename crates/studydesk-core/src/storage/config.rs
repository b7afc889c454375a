//! TOML-based application configuration.
//!
//! Stores engine-level preferences:
//! - Default durations for derived time slots
//! - The theme a brand-new user starts with
//!
//! Configuration is stored at `~/.config/studydesk/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::model::ThemeMode;

/// Derived-slot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsConfig {
    /// Minutes a derived assignment slot spans.
    #[serde(default = "default_assignment_minutes")]
    pub assignment_minutes: u32,
    /// Minutes a derived exam slot spans.
    #[serde(default = "default_exam_minutes")]
    pub exam_minutes: u32,
}

/// UI-facing defaults the engine hands to new users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme for users with no stored preference.
    #[serde(default)]
    pub default_theme: ThemeMode,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studydesk/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub slots: SlotsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_assignment_minutes() -> u32 {
    60
}
fn default_exam_minutes() -> u32 {
    120
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            assignment_minutes: default_assignment_minutes(),
            exam_minutes: default_exam_minutes(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeMode::System,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slots: SlotsConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.slots.assignment_minutes, 60);
        assert_eq!(parsed.slots.exam_minutes, 120);
        assert_eq!(parsed.ui.default_theme, ThemeMode::System);
    }

    #[test]
    fn partial_config_fills_missing_fields() {
        let parsed: Config = toml::from_str("[slots]\nexam_minutes = 90\n").unwrap();
        assert_eq!(parsed.slots.exam_minutes, 90);
        assert_eq!(parsed.slots.assignment_minutes, 60);
    }
}
