//! Keyword heuristics that bucket backend field names into UI groups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// UI-only bucket of related fields. Never sent to the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldGroup {
    #[default]
    Demographics,
    Services,
    Billing,
    Usage,
    Charges,
    Other,
}

/// Keyword rules in evaluation order. The first rule with a hit wins.
const RULES: &[(FieldGroup, &[&str])] = &[
    (
        FieldGroup::Demographics,
        &["age", "gender", "married", "dependents", "senior", "under 30", "referr"],
    ),
    (
        FieldGroup::Services,
        &[
            "internet",
            "stream",
            "security",
            "backup",
            "device",
            "support",
            "unlimited",
            "phone",
            "lines",
        ],
    ),
    (
        FieldGroup::Billing,
        &["contract", "payment", "paperless", "offer"],
    ),
    (
        FieldGroup::Usage,
        &["gb", "download", "tenure", "long distance"],
    ),
    (
        FieldGroup::Charges,
        &["charge", "revenue", "refund", "cltv"],
    ),
];

impl FieldGroup {
    pub const ALL: [FieldGroup; 6] = [
        FieldGroup::Demographics,
        FieldGroup::Services,
        FieldGroup::Billing,
        FieldGroup::Usage,
        FieldGroup::Charges,
        FieldGroup::Other,
    ];

    /// Display name shown in the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Demographics => "Demographics",
            Self::Services => "Services",
            Self::Billing => "Billing",
            Self::Usage => "Usage",
            Self::Charges => "Charges",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a group label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field group '{0}'")]
pub struct UnknownGroup(pub String);

impl FromStr for FieldGroup {
    type Err = UnknownGroup;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|group| group.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownGroup(trimmed.to_string()))
    }
}

impl Serialize for FieldGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for FieldGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Assign a field name to its group. Total, deterministic and case-insensitive.
pub fn classify(field_name: &str) -> FieldGroup {
    let lowered = field_name.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(group, _)| *group)
        .unwrap_or(FieldGroup::Other)
}
