//! Main TUI runner - entry point and event loop

use std::path::PathBuf;

use finguard_app::config::Settings;
use finguard_app::Engine;
use finguard_core::prelude::*;
use ratatui::DefaultTerminal;

use super::{event, render, terminal};

/// Run the TUI, optionally uploading `initial_file` right away.
pub async fn run(settings: Settings, initial_file: Option<PathBuf>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings)?;

    // A rejected file is reported inside the upload control, not as an exit
    if let Some(path) = initial_file {
        if let Err(e) = engine.select_initial_file(path) {
            info!("Starting without an upload: {}", e);
        }
    }

    let mut term = terminal::init()?;
    info!("FinGuard TUI started");

    let result = run_loop(&mut term, &mut engine);

    terminal::restore();
    info!("FinGuard TUI stopped");

    result
}

/// Main event loop
fn run_loop(terminal: &mut DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Upload results and signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &mut engine.state))
            .context("Drawing frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
