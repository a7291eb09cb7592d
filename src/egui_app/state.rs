//! Shared state types for the egui UI.

mod form;
mod monitoring;
mod prediction;
mod raw_request;
mod status;

pub use form::*;
pub use monitoring::*;
pub use prediction::*;
pub use raw_request::*;
pub use status::*;

use super::controller::SessionError;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Which front-end drives the orchestrator.
    pub view: ViewMode,
    pub form: FormState,
    pub prediction: PredictionState,
    pub raw_request: RawRequestState,
    pub api_health: ApiHealth,
    pub monitoring: MonitoringState,
    /// Last failed sample fetch. Kept apart from the predict outcome and
    /// cleared only by a successful sample load.
    pub sample_error: Option<SessionError>,
    /// Set when the field schema could not be loaded; blocks the whole view.
    pub fatal_error: Option<SessionError>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            view: ViewMode::default(),
            form: FormState::default(),
            prediction: PredictionState::default(),
            raw_request: RawRequestState::default(),
            api_health: ApiHealth::default(),
            monitoring: MonitoringState::default(),
            sample_error: None,
            fatal_error: None,
        }
    }
}

/// Front-end shown in the central panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Schema-driven form.
    #[default]
    Form,
    /// Free-text JSON request editor.
    RawRequest,
}

/// Backend reachability shown in the top bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ApiHealth {
    #[default]
    Unknown,
    Checking,
    Connected,
    Unreachable(String),
}
