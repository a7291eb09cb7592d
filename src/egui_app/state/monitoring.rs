use crate::api::MonitoringStats;

/// Backend probability statistics card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonitoringState {
    pub stats: Option<MonitoringStats>,
    pub loading: bool,
    /// Last fetch failure; kept local to the card.
    pub last_error: Option<String>,
}
