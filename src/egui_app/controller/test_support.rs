use super::*;
use crate::api::{ApiError, MonitoringStats, PredictBody, PredictionResult};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

/// In-memory backend with canned responses and call recording.
pub(super) struct MockBackend {
    pub(super) meta: Result<FieldMetadata, ApiError>,
    pub(super) sample: Mutex<Result<FeatureSet, ApiError>>,
    pub(super) prediction: Result<PredictionResult, ApiError>,
    pub(super) health: Result<(), ApiError>,
    /// Time each predict call blocks before answering.
    pub(super) predict_delay: Duration,
    pub(super) predict_calls: AtomicUsize,
    pub(super) sample_calls: AtomicUsize,
    pub(super) last_body: Mutex<Option<PredictBody>>,
}

impl MockBackend {
    pub(super) fn telco() -> Self {
        Self {
            meta: Ok(telco_meta()),
            sample: Mutex::new(Ok(telco_sample())),
            prediction: Ok(PredictionResult {
                pred_label: "Yes".into(),
                pred_proba_yes: 0.87,
            }),
            health: Ok(()),
            predict_delay: Duration::ZERO,
            predict_calls: AtomicUsize::new(0),
            sample_calls: AtomicUsize::new(0),
            last_body: Mutex::new(None),
        }
    }

    /// Make every later sample fetch fail with `error`.
    pub(super) fn fail_samples_with(&self, error: ApiError) {
        *self.sample.lock().unwrap() = Err(error);
    }

    pub(super) fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub(super) fn sample_calls(&self) -> usize {
        self.sample_calls.load(Ordering::SeqCst)
    }

    pub(super) fn last_body(&self) -> Option<PredictBody> {
        self.last_body.lock().unwrap().clone()
    }
}

impl PredictionBackend for MockBackend {
    fn fetch_meta(&self) -> Result<FieldMetadata, ApiError> {
        self.meta.clone()
    }

    fn fetch_sample(&self) -> Result<FeatureSet, ApiError> {
        self.sample_calls.fetch_add(1, Ordering::SeqCst);
        self.sample.lock().unwrap().clone()
    }

    fn check_health(&self) -> Result<(), ApiError> {
        self.health.clone()
    }

    fn predict(&self, body: &PredictBody) -> Result<PredictionResult, ApiError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        if !self.predict_delay.is_zero() {
            thread::sleep(self.predict_delay);
        }
        *self.last_body.lock().unwrap() = Some(body.clone());
        self.prediction.clone()
    }

    fn fetch_monitoring_stats(&self) -> Result<MonitoringStats, ApiError> {
        Ok(MonitoringStats {
            count: 1,
            sum: 0.87,
            mean: 0.87,
            min: 0.87,
            max: 0.87,
            ..MonitoringStats::default()
        })
    }
}

pub(super) fn telco_meta() -> FieldMetadata {
    serde_json::from_str(
        r#"{
            "expected_cols": ["Gender", "Age", "Contract", "Internet Service", "Monthly Charge", "Total Charges"],
            "categorical_options": {
                "Gender": ["Female", "Male"],
                "Contract": ["Month-to-Month", "One Year", "Two Year"],
                "Internet Service": ["Yes", "No"]
            },
            "defaults": {"Age": 46.0, "Monthly Charge": 64.76}
        }"#,
    )
    .unwrap()
}

pub(super) fn telco_sample() -> FeatureSet {
    serde_json::from_str(
        r#"{"Gender": "Female", "Age": 29, "Contract": "Month-to-Month", "Internet Service": "Yes", "Monthly Charge": 95.5, "Total Charges": 1200.0}"#,
    )
    .unwrap()
}

pub(super) fn controller_with(backend: MockBackend) -> (EguiController, Arc<MockBackend>) {
    let backend = Arc::new(backend);
    let controller = EguiController::new(backend.clone(), &UiSettings::default());
    (controller, backend)
}

/// Poll until every worker has reported back.
pub(super) fn settle(controller: &mut EguiController) {
    for _ in 0..200 {
        controller.poll_background_jobs();
        if !controller.has_pending_jobs() {
            return;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("background jobs did not settle");
}

/// Controller that has finished the startup fetches.
pub(super) fn started_controller(backend: MockBackend) -> (EguiController, Arc<MockBackend>) {
    let (mut controller, backend) = controller_with(backend);
    controller.start();
    settle(&mut controller);
    (controller, backend)
}
