use std::panic::{self, AssertUnwindSafe};
use std::sync::{
    Arc,
    mpsc::{Receiver, Sender},
};
use std::thread;

use crate::api::{ApiError, MonitoringStats, PredictBody, PredictionBackend, PredictionResult};
use crate::features::FeatureSet;
use crate::schema::FieldMetadata;

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    MetaLoaded(Result<FieldMetadata, ApiError>),
    SampleLoaded(Result<FeatureSet, ApiError>),
    Predicted(Result<PredictionResult, ApiError>),
    HealthChecked(Result<(), ApiError>),
    MonitoringLoaded(Result<MonitoringStats, ApiError>),
}

/// Worker threads for backend calls, one in-flight flag per call kind.
pub(crate) struct ControllerJobs {
    backend: Arc<dyn PredictionBackend>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    pub(super) meta_in_progress: bool,
    pub(super) sample_in_progress: bool,
    pub(super) predict_in_progress: bool,
    pub(super) health_in_progress: bool,
    pub(super) monitoring_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            backend,
            message_tx,
            message_rx,
            meta_in_progress: false,
            sample_in_progress: false,
            predict_in_progress: false,
            health_in_progress: false,
            monitoring_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn any_in_progress(&self) -> bool {
        self.meta_in_progress
            || self.sample_in_progress
            || self.predict_in_progress
            || self.health_in_progress
            || self.monitoring_in_progress
    }

    pub(super) fn begin_meta_load(&mut self) {
        if self.meta_in_progress {
            return;
        }
        self.meta_in_progress = true;
        self.spawn("metadata", |backend| backend.fetch_meta(), JobMessage::MetaLoaded);
    }

    pub(super) fn clear_meta_load(&mut self) {
        self.meta_in_progress = false;
    }

    pub(super) fn begin_sample_load(&mut self) {
        if self.sample_in_progress {
            return;
        }
        self.sample_in_progress = true;
        self.spawn("sample", |backend| backend.fetch_sample(), JobMessage::SampleLoaded);
    }

    pub(super) fn clear_sample_load(&mut self) {
        self.sample_in_progress = false;
    }

    pub(super) fn begin_predict(&mut self, body: PredictBody) {
        if self.predict_in_progress {
            return;
        }
        self.predict_in_progress = true;
        self.spawn(
            "predict",
            move |backend| backend.predict(&body),
            JobMessage::Predicted,
        );
    }

    pub(super) fn clear_predict(&mut self) {
        self.predict_in_progress = false;
    }

    pub(super) fn begin_health_check(&mut self) {
        if self.health_in_progress {
            return;
        }
        self.health_in_progress = true;
        self.spawn("health", |backend| backend.check_health(), JobMessage::HealthChecked);
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_in_progress = false;
    }

    pub(super) fn begin_monitoring_load(&mut self) {
        if self.monitoring_in_progress {
            return;
        }
        self.monitoring_in_progress = true;
        self.spawn(
            "monitoring",
            |backend| backend.fetch_monitoring_stats(),
            JobMessage::MonitoringLoaded,
        );
    }

    pub(super) fn clear_monitoring_load(&mut self) {
        self.monitoring_in_progress = false;
    }

    /// Run `work` on a worker thread and post its result. A panicking worker
    /// still reports back so the matching in-flight flag is always cleared.
    fn spawn<T, F, W>(&self, name: &'static str, work: F, wrap: W)
    where
        T: Send + 'static,
        F: FnOnce(&dyn PredictionBackend) -> Result<T, ApiError> + Send + 'static,
        W: FnOnce(Result<T, ApiError>) -> JobMessage + Send + 'static,
    {
        let backend = Arc::clone(&self.backend);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| work(backend.as_ref())))
                .unwrap_or_else(|_| {
                    tracing::error!("{name} worker panicked");
                    Err(ApiError::Internal(format!("{name} request aborted")))
                });
            let _ = tx.send(wrap(result));
        });
    }
}
