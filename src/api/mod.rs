//! Client for the model-serving backend.
//!
//! The backend exposes `/meta`, `/sample`, `/health`, `/predict` and
//! `/monitoring/stats`. The [`PredictionBackend`] trait is the seam the
//! controller drives, so tests can swap in an in-memory backend.

mod client;
mod errors;
mod types;

pub use client::HttpBackend;
pub use errors::ApiError;
pub use types::{MonitoringStats, PredictBody, PredictionResult, SampleResponse};

use crate::features::FeatureSet;
use crate::schema::FieldMetadata;

/// Operations the form needs from a prediction service.
pub trait PredictionBackend: Send + Sync {
    /// Fetch the field schema.
    fn fetch_meta(&self) -> Result<FieldMetadata, ApiError>;
    /// Fetch a default feature set used to seed the form.
    fn fetch_sample(&self) -> Result<FeatureSet, ApiError>;
    /// Probe reachability. Any error means unreachable.
    fn check_health(&self) -> Result<(), ApiError>;
    /// Submit a request document and parse the prediction.
    fn predict(&self, body: &PredictBody) -> Result<PredictionResult, ApiError>;
    /// Fetch aggregate probability statistics.
    fn fetch_monitoring_stats(&self) -> Result<MonitoringStats, ApiError>;
}
