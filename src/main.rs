//! FinGuard - terminal client for the invoice risk analysis service
//!
//! This is the binary entry point. The UI lives in `finguard-tui`; the
//! headless runner here reports a single upload as NDJSON.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use finguard_app::config;
use finguard_core::logging;

/// FinGuard AI - Smart Invoice Validator
#[derive(Parser, Debug)]
#[command(name = "finguard", version)]
#[command(about = "Upload an invoice and review its AI risk assessment", long_about = None)]
struct Args {
    /// Invoice to upload on start (PDF, PNG, JPG, JPEG)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Backend origin, overriding the config file (e.g. http://127.0.0.1:5001)
    #[arg(long, value_name = "URL")]
    backend: Option<String>,

    /// Upload FILE without the TUI and print JSON events to stdout
    #[arg(long, requires = "file")]
    headless: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let mut settings = config::load_settings();
    if let Some(origin) = args.backend {
        tracing::info!("Backend origin overridden on the command line: {}", origin);
        settings.backend.origin = origin;
    }

    match (args.headless, args.file) {
        (true, Some(file)) => {
            let succeeded = headless::runner::run_headless(settings, file).await?;
            if !succeeded {
                std::process::exit(1);
            }
            Ok(())
        }
        (_, file) => Ok(finguard_tui::run(settings, file).await?),
    }
}
