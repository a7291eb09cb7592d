//! Helpers to convert session data into egui-facing view structs.

use crate::api::{MonitoringStats, PredictionResult};
use crate::egui_app::state::{ApiHealth, PredictionState};
use crate::egui_app::ui::style::StatusTone;
use crate::features::FeatureSet;
use crate::schema::{FieldGroup, FieldMetadata, GroupIndex};

/// Sidebar entry for one non-empty group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupRowView {
    pub group: FieldGroup,
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

/// Build sidebar rows in group display order.
pub fn group_rows(groups: &GroupIndex, active: FieldGroup) -> Vec<GroupRowView> {
    groups
        .groups()
        .map(|group| GroupRowView {
            group,
            label: group.label().to_string(),
            count: groups.count(group),
            selected: group == active,
        })
        .collect()
}

/// Input widget chosen for a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldControl {
    /// Dropdown over the declared options.
    Choice {
        options: Vec<String>,
        selected: String,
    },
    /// Free-text box with the schema default as placeholder.
    Text { value: String, placeholder: String },
}

/// Pick the control for `field`.
///
/// A categorical field whose current value is unset or not among its options
/// shows the first option. Nothing is written back until the user picks one.
pub fn field_control(meta: &FieldMetadata, features: &FeatureSet, field: &str) -> FieldControl {
    let current = features.display_value(field);
    match meta.options_for(field) {
        Some(options) if !options.is_empty() => {
            let selected = if options.iter().any(|option| *option == current) {
                current
            } else {
                options[0].clone()
            };
            FieldControl::Choice {
                options: options.to_vec(),
                selected,
            }
        }
        _ => FieldControl::Text {
            value: current,
            placeholder: meta.placeholder_for(field),
        },
    }
}

/// Rendered prediction verdict.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionView {
    pub label: String,
    /// Positive ("Yes") verdicts use the warning tone.
    pub positive: bool,
    /// Probability for the bar, clamped to `0.0..=1.0`.
    pub fraction: f32,
    pub percent_text: String,
    pub raw_text: String,
}

impl PredictionView {
    pub fn from_result(result: &PredictionResult) -> Self {
        let probability = if result.pred_proba_yes.is_finite() {
            result.pred_proba_yes.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            label: result.pred_label.clone(),
            positive: result.is_positive(),
            fraction: probability as f32,
            percent_text: format!("{:.1}%", probability * 100.0),
            raw_text: format!("{:.4}", result.pred_proba_yes),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultView {
    Idle,
    Loading,
    Error(String),
    Success(PredictionView),
}

/// Loading wins over any stale outcome, then errors, then results.
pub fn result_view(state: &PredictionState) -> ResultView {
    if state.loading {
        return ResultView::Loading;
    }
    if let Some(error) = &state.last_error {
        return ResultView::Error(error.to_string());
    }
    match &state.result {
        Some(result) => ResultView::Success(PredictionView::from_result(result)),
        None => ResultView::Idle,
    }
}

/// Label, tone and hover text for the backend health indicator.
pub fn health_badge(health: &ApiHealth) -> (&'static str, StatusTone, Option<String>) {
    match health {
        ApiHealth::Unknown => ("API unknown", StatusTone::Idle, None),
        ApiHealth::Checking => ("Checking API", StatusTone::Busy, None),
        ApiHealth::Connected => ("API connected", StatusTone::Info, None),
        ApiHealth::Unreachable(reason) => {
            ("API unreachable", StatusTone::Error, Some(reason.clone()))
        }
    }
}

/// Label/value rows for the monitoring card. Empty when nothing was recorded.
pub fn monitoring_rows(stats: &MonitoringStats) -> Vec<(&'static str, String)> {
    if !stats.has_data() {
        return Vec::new();
    }
    let mut rows = vec![
        ("Predictions", stats.count.to_string()),
        ("Mean P(Yes)", format!("{:.3}", stats.mean)),
        ("Min", format!("{:.3}", stats.min)),
        ("Max", format!("{:.3}", stats.max)),
    ];
    if let Some(updated) = &stats.updated_at {
        rows.push(("Updated", updated.clone()));
    }
    rows
}
