//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};
use finguard_core::{AnalysisResult, UploadSelection};

use crate::config::Settings;
use crate::results_view_state::ResultsViewState;
use crate::upload_control::UploadControlState;

/// Lifecycle of the application itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Upload control and results
    #[default]
    Normal,

    /// Quit confirmation while an upload is in flight
    ConfirmQuit,
}

/// State of the single outstanding analysis request.
///
/// Loading, error and results are mutually exclusive because they are
/// variants of one enum.
#[derive(Debug, Clone, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading {
        file_name: String,
        started_at: DateTime<Local>,
    },
    Succeeded(AnalysisResult),
    Failed {
        message: String,
    },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Short name for logs and headless output.
    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading { .. } => "loading",
            RequestState::Succeeded(_) => "succeeded",
            RequestState::Failed { .. } => "failed",
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub ui_mode: UiMode,

    /// The analysis request, if any
    pub request: RequestState,

    /// Path input and rejection hint
    pub upload: UploadControlState,

    /// Scroll position of the results pane
    pub results_view: ResultsViewState,

    /// Loaded settings
    pub settings: Settings,

    /// Spinner frame, advanced on every tick while loading
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            request: RequestState::Idle,
            upload: UploadControlState::new(),
            results_view: ResultsViewState::new(),
            settings,
            spinner_frame: 0,
        }
    }

    pub fn backend_origin(&self) -> &str {
        &self.settings.backend.origin
    }

    /// The upload control ignores input while a request is in flight.
    pub fn upload_disabled(&self) -> bool {
        self.request.is_loading()
    }

    // ─────────────────────────────────────────────────────────
    // Request Transitions
    // ─────────────────────────────────────────────────────────

    /// Enter Loading for `selection`, discarding any previous outcome.
    pub fn begin_upload(&mut self, selection: &UploadSelection) {
        self.request = RequestState::Loading {
            file_name: selection.file_name.clone(),
            started_at: Local::now(),
        };
        self.results_view.reset();
        self.spinner_frame = 0;
    }

    pub fn complete_upload(&mut self, result: AnalysisResult) {
        self.request = RequestState::Succeeded(result);
        self.results_view.reset();
    }

    pub fn fail_upload(&mut self, message: String) {
        self.request = RequestState::Failed { message };
    }

    pub fn tick(&mut self) {
        if self.request.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Quit Handling
    // ─────────────────────────────────────────────────────────

    /// Request to quit - asks first while an upload is in flight
    pub fn request_quit(&mut self) {
        if self.request.is_loading() {
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Confirm quit (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
