//! Terminal setup and restoration
//!
//! Bracketed paste is enabled on top of ratatui's defaults: terminals
//! deliver a dropped file's path as a paste, and without bracketing it
//! would arrive as individual key presses (with Enter submitting early).

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use finguard_core::prelude::*;
use ratatui::DefaultTerminal;

/// Enter the alternate screen in raw mode with bracketed paste.
pub fn init() -> Result<DefaultTerminal> {
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = execute!(std::io::stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable, drops arrive as keystrokes: {}", e);
    }
    Ok(terminal)
}

/// Leave the alternate screen and restore the terminal.
pub fn restore() {
    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();
}

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}
