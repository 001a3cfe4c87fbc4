//! Settings parser for `{config_dir}/finguard/config.toml`

use super::types::Settings;
use finguard_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const FINGUARD_DIR: &str = "finguard";

/// Location of the user's config file, if the platform has a config dir.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(FINGUARD_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the user's config directory.
pub fn load_settings() -> Settings {
    match config_file_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicit path, falling back to defaults.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
