//! Infrastructure and file-selection errors
//!
//! Backend failures are not here: they belong to the upload itself and are
//! modelled by the client crate, surfacing as a failed request rather than
//! an `Error`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Terminal
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // Picking the invoice to upload
    #[error("Unsupported file type: {name} (accepted: {})", crate::upload::SUPPORTED_FORMATS_LABEL)]
    UnsupportedFile { name: String },

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Only one file can be uploaded at a time")]
    TooManyFiles,

    #[error("No file path found in dropped text")]
    NoFileSelected,

    // Settings
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid backend origin: {origin}")]
    InvalidOrigin { origin: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn unsupported_file(name: impl Into<String>) -> Self {
        Self::UnsupportedFile { name: name.into() }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn invalid_origin(origin: impl Into<String>) -> Self {
        Self::InvalidOrigin {
            origin: origin.into(),
        }
    }

    /// Selection errors are reported inside the upload control and never
    /// leave the application in a failed state.
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedFile { .. }
                | Error::FileNotFound { .. }
                | Error::TooManyFiles
                | Error::NoFileSelected
        )
    }
}

/// Log an error with a short description of what was being attempted
/// before propagating it.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", context.into(), err);
            err
        })
    }
}
