use super::*;
use crate::api::{ApiError, MonitoringStats};
use crate::egui_app::state::ApiHealth;
use crate::schema::build_groups;

impl EguiController {
    /// Fetch the field schema. Also used by the retry action after a failure.
    pub fn load_meta(&mut self) {
        if self.jobs.meta_in_progress {
            return;
        }
        self.set_status("Loading field metadata", StatusTone::Busy);
        self.jobs.begin_meta_load();
    }

    /// Fetch a sample record. Ignored while a previous sample load is pending.
    pub fn load_sample(&mut self) {
        if self.jobs.sample_in_progress {
            return;
        }
        self.set_status("Loading sample", StatusTone::Busy);
        self.jobs.begin_sample_load();
    }

    pub fn is_sample_loading(&self) -> bool {
        self.jobs.sample_in_progress
    }

    pub fn check_health(&mut self) {
        if self.jobs.health_in_progress {
            return;
        }
        self.ui.api_health = ApiHealth::Checking;
        self.jobs.begin_health_check();
    }

    pub fn refresh_monitoring(&mut self) {
        if self.jobs.monitoring_in_progress {
            return;
        }
        self.ui.monitoring.loading = true;
        self.jobs.begin_monitoring_load();
    }

    pub(super) fn apply_meta(&mut self, result: Result<FieldMetadata, ApiError>) {
        self.jobs.clear_meta_load();
        match result {
            Ok(meta) => {
                self.groups = build_groups(&meta.expected_cols);
                if !self.groups.contains(self.ui.form.active_group)
                    && let Some(first) = self.groups.first_group()
                {
                    self.ui.form.active_group = first;
                }
                tracing::info!(
                    "Loaded {} fields in {} groups",
                    meta.field_count(),
                    self.groups.len()
                );
                self.set_status(
                    format!("Loaded {} fields", meta.field_count()),
                    StatusTone::Info,
                );
                self.meta = Some(meta);
                self.ui.fatal_error = None;
            }
            Err(err) => {
                tracing::error!("Metadata load failed: {err}");
                let error = SessionError::MetadataLoad(err);
                self.set_status(error.to_string(), StatusTone::Error);
                self.ui.fatal_error = Some(error);
            }
        }
    }

    pub(super) fn apply_sample(&mut self, result: Result<FeatureSet, ApiError>) {
        self.jobs.clear_sample_load();
        self.initial_sample_settled = true;
        match result {
            Ok(features) => {
                tracing::info!("Loaded sample with {} values", features.len());
                self.features = features;
                self.ui.sample_error = None;
                self.ui.prediction.clear_outcome();
                self.set_status("Sample loaded", StatusTone::Info);
            }
            Err(err) => {
                tracing::warn!("Sample load failed: {err}");
                let error = SessionError::SampleLoad(err);
                self.set_status(error.to_string(), StatusTone::Warning);
                self.ui.sample_error = Some(error);
            }
        }
    }

    pub(super) fn apply_health(&mut self, result: Result<(), ApiError>) {
        self.jobs.clear_health_check();
        self.ui.api_health = match result {
            Ok(()) => ApiHealth::Connected,
            Err(err) => {
                tracing::warn!("Health check failed: {err}");
                ApiHealth::Unreachable(err.to_string())
            }
        };
    }

    pub(super) fn apply_monitoring(&mut self, result: Result<MonitoringStats, ApiError>) {
        self.jobs.clear_monitoring_load();
        self.ui.monitoring.loading = false;
        match result {
            Ok(stats) => {
                self.ui.monitoring.stats = Some(stats);
                self.ui.monitoring.last_error = None;
            }
            Err(err) => {
                tracing::debug!("Monitoring stats unavailable: {err}");
                self.ui.monitoring.last_error = Some(err.to_string());
            }
        }
    }
}
