//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use finguard_app::config::IconMode;

/// Braille spinner frames, advanced once per tick.
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn shield(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f132}", // nf-fa-shield
            IconMode::Unicode => "\u{25c6}",   // ◆
        }
    }

    pub fn upload(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f093}", // nf-fa-upload
            IconMode::Unicode => "\u{21e7}",   // ⇧
        }
    }

    pub fn file(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f15b}", // nf-fa-file
            IconMode::Unicode => "\u{25a4}",   // ▤
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00d}", // nf-fa-close
            IconMode::Unicode => "\u{2717}",   // ✗
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{2139}",   // ℹ
        }
    }

    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{2022}",   // •
        }
    }
}

/// Spinner frame for a tick counter.
pub fn spinner_frame(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(icons: IconSet) -> [&'static str; 8] {
        [
            icons.shield(),
            icons.upload(),
            icons.file(),
            icons.alert(),
            icons.check(),
            icons.close(),
            icons.info(),
            icons.bullet(),
        ]
    }

    #[test]
    fn test_icons_are_non_empty() {
        for mode in [IconMode::Unicode, IconMode::NerdFonts] {
            assert!(all(IconSet::new(mode)).iter().all(|icon| !icon.is_empty()));
        }
    }

    #[test]
    fn test_unicode_and_nerd_font_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.upload(), nerd.upload());
        assert_ne!(unicode.alert(), nerd.alert());
    }

    #[test]
    fn test_unicode_status_icons() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.check(), "✓");
        assert_eq!(icons.close(), "✗");
        assert_eq!(icons.alert(), "⚠");
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), "⠋");
        assert_eq!(spinner_frame(SPINNER.len()), "⠋");
        assert_eq!(spinner_frame(11), "⠙");
    }
}
