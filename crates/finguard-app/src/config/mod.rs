//! Configuration file parsing for FinGuard
//!
//! Settings live in `{config_dir}/finguard/config.toml`. Every key is
//! optional; a missing or unreadable file yields the defaults.

pub mod settings;
pub mod types;

pub use settings::{config_file_path, load_settings, load_settings_from};
pub use types::*;
