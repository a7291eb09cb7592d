use super::*;
use crate::api::{ApiError, PredictBody, PredictionResult};

impl EguiController {
    /// Form submission needs a schema and no request already in flight.
    pub fn can_predict(&self) -> bool {
        self.meta.is_some() && !self.ui.prediction.loading
    }

    /// Send the current feature values as `{"features": ...}`.
    pub fn predict(&mut self) {
        if !self.can_predict() {
            return;
        }
        let body = PredictBody::Features {
            features: self.features.clone(),
        };
        self.begin_prediction(body);
    }

    /// Parse the raw editor text and send it unchanged. Text that is not
    /// JSON fails locally without any request.
    pub fn submit_raw_request(&mut self) {
        if self.ui.prediction.loading {
            return;
        }
        match serde_json::from_str::<serde_json::Value>(&self.ui.raw_request.text) {
            Ok(value) => self.begin_prediction(PredictBody::Raw(value)),
            Err(err) => {
                let error = SessionError::RequestBodyParse(err.to_string());
                self.set_status(error.to_string(), StatusTone::Error);
                self.ui.prediction.fail(error);
            }
        }
    }

    fn begin_prediction(&mut self, body: PredictBody) {
        self.ui.prediction.start();
        self.set_status("Requesting prediction", StatusTone::Busy);
        self.jobs.begin_predict(body);
    }

    pub(super) fn apply_prediction(&mut self, result: Result<PredictionResult, ApiError>) {
        self.jobs.clear_predict();
        match result {
            Ok(result) => {
                tracing::info!(
                    label = %result.pred_label,
                    probability = result.pred_proba_yes,
                    "Prediction received"
                );
                self.set_status(
                    format!(
                        "Prediction: {} ({:.1}%)",
                        result.pred_label,
                        result.pred_proba_yes * 100.0
                    ),
                    StatusTone::Info,
                );
                self.ui.prediction.succeed(result);
                self.refresh_monitoring();
            }
            Err(err) => {
                tracing::warn!("Prediction failed: {err}");
                let error = SessionError::Predict(err);
                self.set_status(error.to_string(), StatusTone::Error);
                self.ui.prediction.fail(error);
            }
        }
    }
}
