//! Session orchestration between the egui views and the prediction backend.

mod background_jobs;
mod errors;
mod form;
mod jobs;
mod loading;
mod predict;

#[cfg(test)]
mod test_support;

pub use errors::SessionError;

use std::sync::Arc;

use crate::api::PredictionBackend;
use crate::config::{StartView, UiSettings};
use crate::egui_app::state::{UiState, ViewMode};
use crate::egui_app::ui::style::StatusTone;
use crate::features::FeatureSet;
use crate::schema::{FieldMetadata, GroupIndex};

/// Maintains session state and bridges backend calls to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    meta: Option<FieldMetadata>,
    groups: GroupIndex,
    features: FeatureSet,
    initial_sample_settled: bool,
    jobs: jobs::ControllerJobs,
}

impl EguiController {
    pub fn new(backend: Arc<dyn PredictionBackend>, settings: &UiSettings) -> Self {
        let mut ui = UiState::default();
        ui.form.active_group = settings.default_group;
        ui.view = match settings.start_view {
            StartView::Form => ViewMode::Form,
            StartView::Raw => ViewMode::RawRequest,
        };
        Self {
            ui,
            meta: None,
            groups: GroupIndex::default(),
            features: FeatureSet::new(),
            initial_sample_settled: false,
            jobs: jobs::ControllerJobs::new(backend),
        }
    }

    /// Kick off the startup fetches: schema, sample and health run concurrently.
    pub fn start(&mut self) {
        tracing::info!("Starting prediction session");
        self.load_meta();
        self.load_sample();
        self.check_health();
    }

    pub fn meta(&self) -> Option<&FieldMetadata> {
        self.meta.as_ref()
    }

    pub fn groups(&self) -> &GroupIndex {
        &self.groups
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// The form renders once the schema is known and the first sample has
    /// either arrived or failed.
    pub fn form_ready(&self) -> bool {
        self.meta.is_some() && self.initial_sample_settled
    }

    /// True while any backend call is outstanding.
    pub fn has_pending_jobs(&self) -> bool {
        self.jobs.any_in_progress()
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = crate::egui_app::state::StatusBarState::with_tone(text, tone);
    }
}
