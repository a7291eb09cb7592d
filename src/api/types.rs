use serde::{Deserialize, Serialize};

use crate::features::FeatureSet;

/// Request body for `POST /predict`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictBody {
    /// `{ "features": { ... } }` built from the form.
    Features { features: FeatureSet },
    /// A document typed into the raw editor, sent as-is.
    Raw(serde_json::Value),
}

/// Response body of `GET /sample`.
#[derive(Clone, Debug, Deserialize)]
pub struct SampleResponse {
    pub features: FeatureSet,
}

/// Successful prediction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub pred_label: String,
    pub pred_proba_yes: f64,
}

impl PredictionResult {
    /// True when the label names the positive class.
    pub fn is_positive(&self) -> bool {
        self.pred_label.trim().eq_ignore_ascii_case("yes")
    }
}

/// Running probability statistics kept by the backend.
///
/// Before the first prediction the backend answers with only `error` and a
/// zero `count`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MonitoringStats {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub sum: f64,
    #[serde(default)]
    pub mean: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MonitoringStats {
    pub fn has_data(&self) -> bool {
        self.error.is_none() && self.count > 0
    }
}
