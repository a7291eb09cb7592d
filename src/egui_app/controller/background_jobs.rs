use super::jobs::JobMessage;
use super::*;

impl EguiController {
    /// Drain finished worker results into session state. Called once per frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::MetaLoaded(result) => self.apply_meta(result),
                JobMessage::SampleLoaded(result) => self.apply_sample(result),
                JobMessage::Predicted(result) => self.apply_prediction(result),
                JobMessage::HealthChecked(result) => self.apply_health(result),
                JobMessage::MonitoringLoaded(result) => self.apply_monitoring(result),
            }
        }
    }
}
