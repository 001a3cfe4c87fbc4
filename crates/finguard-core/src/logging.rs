//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/finguard/logs/` so they never
/// interleave with the TUI. Log level is controlled by the `FINGUARD_LOG`
/// environment variable.
///
/// # Examples
/// ```bash
/// FINGUARD_LOG=debug cargo run -- invoice.pdf
/// FINGUARD_LOG=finguard_client=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir).context("Creating log directory")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "finguard.log");

    // Default to info for our crates, allow override via FINGUARD_LOG
    let env_filter = EnvFilter::try_from_env("FINGUARD_LOG").unwrap_or_else(|_| {
        EnvFilter::new(
            "finguard=info,finguard_core=info,finguard_app=info,finguard_client=info,finguard_tui=info,warn",
        )
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("FinGuard starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("finguard").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_finguard_logs() {
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("finguard/logs"));
    }
}
