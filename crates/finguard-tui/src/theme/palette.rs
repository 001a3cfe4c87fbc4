//! Color palette for FinGuard.
//!
//! The web client's accent (`#0066CC`) and secondary grey (`#86868B`) carry
//! over as-is. Its near-black ink (`#1D1D1F`) is only used on colored chips,
//! since body text has to stay readable on dark and light terminals alike.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Reset;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = ACCENT;

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(0, 102, 204); // #0066CC

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Reset;
pub const TEXT_SECONDARY: Color = Color::Rgb(134, 134, 139); // #86868B
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

/// Ink for text drawn on a colored chip
pub const INK: Color = Color::Rgb(29, 29, 31); // #1D1D1F

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_matches_brand_blue() {
        assert_eq!(ACCENT, Color::Rgb(0x00, 0x66, 0xCC));
        assert_eq!(BORDER_ACTIVE, ACCENT);
    }

    #[test]
    fn test_brand_greys() {
        assert_eq!(TEXT_SECONDARY, Color::Rgb(0x86, 0x86, 0x8B));
        assert_eq!(INK, Color::Rgb(0x1D, 0x1D, 0x1F));
    }
}
