mod config;
pub mod database;

pub use config::{Config, SlotsConfig, UiConfig};
pub use database::{Group, StateDb};

use std::path::PathBuf;

/// Returns `~/.config/studydesk[-dev]/` based on STUDYDESK_ENV.
///
/// Set STUDYDESK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYDESK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studydesk-dev")
    } else {
        base_dir.join("studydesk")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
