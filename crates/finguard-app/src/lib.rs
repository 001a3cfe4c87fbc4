//! # finguard-app - Application State and Orchestration
//!
//! TEA (The Elm Architecture) core of FinGuard: the [`AppState`] model,
//! [`Message`]s, the `handler::update` function and the [`Engine`] that
//! drives them for both the TUI and the headless runner.
//!
//! Depends on [`finguard_core`] for domain types and on [`finguard_client`]
//! for talking to the analysis backend.
//!
//! ## Public API
//!
//! - [`Engine`] - Owns state, message channel and backend client
//! - [`AppState`], [`RequestState`] - The model
//! - [`Message`], [`UpdateAction`], [`UpdateResult`] - TEA plumbing
//! - [`UploadControlState`] - Path input and rejection hint
//! - [`config`] - Settings loaded from `config.toml`

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod results_view_state;
pub mod signals;
pub mod state;
pub mod upload_control;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use results_view_state::ResultsViewState;
pub use state::{AppPhase, AppState, RequestState, UiMode};
pub use upload_control::UploadControlState;
