use crate::api::PredictionResult;
use crate::egui_app::controller::SessionError;

/// Predict round-trip state shared by both front-ends.
///
/// `Idle -> Loading -> {Success, Failure}`; a new attempt clears both the
/// previous result and the previous error before anything is sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionState {
    /// True while a predict request is in flight.
    pub loading: bool,
    pub result: Option<PredictionResult>,
    pub last_error: Option<SessionError>,
}

impl PredictionState {
    /// Enter `Loading`, dropping the previous outcome.
    pub fn start(&mut self) {
        self.loading = true;
        self.result = None;
        self.last_error = None;
    }

    pub fn succeed(&mut self, result: PredictionResult) {
        self.loading = false;
        self.last_error = None;
        self.result = Some(result);
    }

    pub fn fail(&mut self, error: SessionError) {
        self.loading = false;
        self.result = None;
        self.last_error = Some(error);
    }

    /// Drop result and error without touching `loading`.
    pub fn clear_outcome(&mut self) {
        self.result = None;
        self.last_error = None;
    }
}
