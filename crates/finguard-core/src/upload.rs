//! Invoice file selection: MIME filtering and drop payload parsing.
//!
//! Terminals deliver a drag-and-dropped file as a pasted path, possibly
//! quoted, backslash-escaped or as a `file://` URI. [`parse_dropped_paths`]
//! turns such a payload back into paths, and [`UploadSelection::from_path`]
//! enforces the accepted file types.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Human-readable list of supported formats.
pub const SUPPORTED_FORMATS_LABEL: &str = "PDF, PNG, JPG, JPEG";

/// Declared MIME type of an accepted invoice file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceMime {
    Pdf,
    Png,
    Jpeg,
}

impl InvoiceMime {
    /// Derive the MIME type from a file extension (case-insensitive), if
    /// it is one of PDF, PNG, JPG or JPEG.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(InvoiceMime::Pdf),
            "png" => Some(InvoiceMime::Png),
            "jpg" | "jpeg" => Some(InvoiceMime::Jpeg),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceMime::Pdf => "application/pdf",
            InvoiceMime::Png => "image/png",
            InvoiceMime::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for InvoiceMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single accepted invoice file, ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSelection {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: InvoiceMime,
}

impl UploadSelection {
    /// Validate a path as an uploadable invoice.
    ///
    /// The type check runs before the filesystem check so that an
    /// unsupported file is reported as such even if it does not exist.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mime =
            InvoiceMime::from_path(&path).ok_or_else(|| Error::unsupported_file(&file_name))?;

        if !path.is_file() {
            return Err(Error::file_not_found(path));
        }

        Ok(Self {
            path,
            file_name,
            mime,
        })
    }

    /// Validate a raw drop/paste payload, which must name exactly one file.
    pub fn from_drop(payload: &str) -> Result<Self> {
        let mut paths = parse_dropped_paths(payload);
        match paths.len() {
            0 => Err(Error::NoFileSelected),
            1 => Self::from_path(paths.remove(0)),
            _ => Err(Error::TooManyFiles),
        }
    }
}

/// Split a dropped/pasted payload into paths.
///
/// Handles single and double quotes, backslash-escaped whitespace (as
/// produced by macOS and most Linux terminals), `file://` URIs and
/// newline-separated lists. A backslash only escapes whitespace, quotes and
/// another backslash, so Windows paths survive unquoted.
pub fn parse_dropped_paths(payload: &str) -> Vec<PathBuf> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = payload.trim().chars().peekable();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_token = true;
            }
            (None, '\\') => {
                match chars.peek() {
                    Some(&next) if next.is_whitespace() || matches!(next, '\\' | '\'' | '"') => {
                        current.push(next);
                        chars.next();
                    }
                    _ => current.push('\\'),
                }
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
        .into_iter()
        .filter(|t| !t.is_empty())
        .map(|t| PathBuf::from(strip_file_uri(&t)))
        .collect()
}

fn strip_file_uri(token: &str) -> String {
    match token.strip_prefix("file://") {
        Some(rest) => rest.replace("%20", " "),
        None => token.to_string(),
    }
}
