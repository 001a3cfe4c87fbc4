//! Configuration types for FinGuard
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `BackendSettings` - Where and how invoices are uploaded
//! - `UiSettings` - Terminal presentation

use std::time::Duration;

use finguard_client::DEFAULT_ORIGIN;
use serde::{Deserialize, Serialize};

/// Global settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Analysis backend settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Scheme, host and port of the analysis backend
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Request timeout in seconds. Absent (or 0) means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            timeout_secs: None,
        }
    }
}

impl BackendSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

/// Icon rendering mode.
///
/// Controls whether the TUI uses Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,
}
