//! Blocking `ureq` implementation of [`PredictionBackend`].

use serde::de::DeserializeOwned;
use url::Url;

use super::{
    ApiError, MonitoringStats, PredictBody, PredictionBackend, PredictionResult, SampleResponse,
};
use crate::config::{ApiSettings, ConfigError};
use crate::features::FeatureSet;
use crate::http_client;
use crate::schema::FieldMetadata;

const MAX_META_RESPONSE_BYTES: usize = 4 * 1024 * 1024;
const MAX_RESPONSE_BYTES: usize = 512 * 1024;
const MAX_ERROR_BODY_BYTES: usize = 256 * 1024;

/// Backend client bound to one base URL.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    base_url: Url,
    agent: ureq::Agent,
}

impl HttpBackend {
    /// Build a client from connection settings.
    pub fn new(settings: &ApiSettings) -> Result<Self, ConfigError> {
        let mut base_url = settings.parsed_base_url()?;
        // Endpoints are joined relative to the base, which needs a trailing slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            agent: http_client::agent(settings),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::Transport(format!("Invalid endpoint '{path}': {err}")))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, max_bytes: usize) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {url}");
        let response = self.agent.get(url.as_str()).call().map_err(map_call_error)?;
        parse_body(response, max_bytes)
    }
}

impl PredictionBackend for HttpBackend {
    fn fetch_meta(&self) -> Result<FieldMetadata, ApiError> {
        let meta: FieldMetadata = self.get_json("meta", MAX_META_RESPONSE_BYTES)?;
        meta.validate()?;
        Ok(meta)
    }

    fn fetch_sample(&self) -> Result<FeatureSet, ApiError> {
        let sample: SampleResponse = self.get_json("sample", MAX_RESPONSE_BYTES)?;
        Ok(sample.features)
    }

    fn check_health(&self) -> Result<(), ApiError> {
        let url = self.endpoint("health")?;
        self.agent
            .get(url.as_str())
            .call()
            .map(|_| ())
            .map_err(map_call_error)
    }

    fn predict(&self, body: &PredictBody) -> Result<PredictionResult, ApiError> {
        let url = self.endpoint("predict")?;
        tracing::debug!("POST {url}");
        let response = self
            .agent
            .post(url.as_str())
            .set("Accept", "application/json")
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(map_call_error)?;
        parse_body(response, MAX_RESPONSE_BYTES)
    }

    fn fetch_monitoring_stats(&self) -> Result<MonitoringStats, ApiError> {
        self.get_json("monitoring/stats", MAX_RESPONSE_BYTES)
    }
}

fn map_call_error(error: ureq::Error) -> ApiError {
    match error {
        ureq::Error::Status(code, response) => {
            let status_text = response.status_text().to_string();
            let body = http_client::read_response_text(response, MAX_ERROR_BODY_BYTES).ok();
            ApiError::backend(code, &status_text, body.as_deref())
        }
        ureq::Error::Transport(err) => ApiError::Transport(err.to_string()),
    }
}

fn parse_body<T: DeserializeOwned>(response: ureq::Response, max_bytes: usize) -> Result<T, ApiError> {
    let body = http_client::read_response_text(response, max_bytes)
        .map_err(|err| ApiError::InvalidResponse(err.to_string()))?;
    serde_json::from_str(body.trim()).map_err(|err| ApiError::InvalidResponse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::{json_response, refused_url, serve_once};

    fn empty_body() -> PredictBody {
        PredictBody::Features {
            features: FeatureSet::new(),
        }
    }

    fn backend_for(url: &str) -> HttpBackend {
        HttpBackend::new(&ApiSettings {
            base_url: url.to_string(),
            ..ApiSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn base_url_gains_trailing_slash_so_endpoints_nest() {
        let backend = backend_for("http://127.0.0.1:8000/api/v1");
        assert_eq!(
            backend.endpoint("predict").unwrap().as_str(),
            "http://127.0.0.1:8000/api/v1/predict"
        );
        let backend = backend_for("http://127.0.0.1:8000");
        assert_eq!(
            backend.endpoint("monitoring/stats").unwrap().as_str(),
            "http://127.0.0.1:8000/monitoring/stats"
        );
    }

    #[test]
    fn fetch_meta_parses_and_validates() {
        let body = r#"{"expected_cols":["Gender","Contract"],"categorical_options":{"Gender":["Female","Male"]},"defaults":{"Gender":"Male"}}"#;
        let url = serve_once(json_response("200 OK", body));
        let meta = backend_for(&url).fetch_meta().unwrap();
        assert_eq!(meta.expected_cols, vec!["Gender", "Contract"]);
        assert!(meta.is_categorical("Gender"));
    }

    #[test]
    fn fetch_meta_rejects_duplicate_columns() {
        let url = serve_once(json_response("200 OK", r#"{"expected_cols":["Age","Age"]}"#));
        let err = backend_for(&url).fetch_meta().unwrap_err();
        assert!(matches!(err, ApiError::Metadata(_)));
    }

    #[test]
    fn fetch_sample_unwraps_features() {
        let url = serve_once(json_response(
            "200 OK",
            r#"{"features":{"Age":29.0,"Contract":"Month-to-Month"}}"#,
        ));
        let features = backend_for(&url).fetch_sample().unwrap();
        assert_eq!(features.display_value("Contract"), "Month-to-Month");
        assert_eq!(features.display_value("Age"), "29.0");
    }

    #[test]
    fn predict_parses_success() {
        let url = serve_once(json_response(
            "200 OK",
            r#"{"pred_label":"Yes","pred_proba_yes":0.87}"#,
        ));
        let result = backend_for(&url).predict(&empty_body()).unwrap();
        assert_eq!(result.pred_label, "Yes");
        assert_eq!(result.pred_proba_yes, 0.87);
    }

    #[test]
    fn predict_surfaces_structured_error_body() {
        let url = serve_once(json_response(
            "422 Unprocessable Entity",
            r#"{"detail":"invalid field X"}"#,
        ));
        let err = backend_for(&url).predict(&empty_body()).unwrap_err();
        assert!(matches!(err, ApiError::Backend { status: 422, .. }));
        assert!(err.to_string().contains("invalid field X"));
    }

    #[test]
    fn predict_synthesizes_message_for_plain_error_body() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 5\r\nConnection: close\r\n\r\noops!"
                .to_string(),
        );
        let err = backend_for(&url).predict(&empty_body()).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn predict_reports_transport_failure() {
        let err = backend_for(&refused_url()).predict(&empty_body()).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn malformed_success_body_is_invalid_response() {
        let url = serve_once(json_response("200 OK", r#"{"label":"Yes"}"#));
        let err = backend_for(&url).predict(&empty_body()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[test]
    fn health_treats_error_status_as_unreachable() {
        let url = serve_once(json_response("200 OK", r#"{"status":"ok"}"#));
        assert!(backend_for(&url).check_health().is_ok());
        let url = serve_once(json_response("503 Service Unavailable", "{}"));
        assert!(backend_for(&url).check_health().is_err());
        assert!(backend_for(&refused_url()).check_health().is_err());
    }

    #[test]
    fn monitoring_stats_parse() {
        let url = serve_once(json_response(
            "200 OK",
            r#"{"count":2,"sum":1.0,"mean":0.5,"min":0.2,"max":0.8,"updated_at":null}"#,
        ));
        let stats = backend_for(&url).fetch_monitoring_stats().unwrap();
        assert_eq!(stats.count, 2);
        assert!(stats.has_data());
    }
}
