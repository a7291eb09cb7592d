//! Editable feature values keyed by backend field name.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar feature value as exchanged with the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl FeatureValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Value rendered for a text control; null renders as an empty string.
    pub fn display_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// Current field values submitted for a prediction.
///
/// Keys normally come from the metadata field list; keys outside it are
/// carried through untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet {
    values: BTreeMap<String, FeatureValue>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with exactly one key replaced. `self` is left untouched.
    #[must_use]
    pub fn with_field(&self, name: &str, value: FeatureValue) -> Self {
        let mut values = self.values.clone();
        values.insert(name.to_string(), value);
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.values.get(name)
    }

    /// Text shown for `name`; unset and null both render as "".
    pub fn display_value(&self, name: &str) -> String {
        self.get(name)
            .map(FeatureValue::display_text)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<FeatureValue>> FromIterator<(K, V)> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_leaves_original_untouched() {
        let original: FeatureSet = [("Contract", "Month-to-Month"), ("Gender", "Female")]
            .into_iter()
            .collect();
        let updated = original.with_field("Contract", FeatureValue::text("Two Year"));

        assert_eq!(original.display_value("Contract"), "Month-to-Month");
        assert_eq!(updated.display_value("Contract"), "Two Year");
        assert_eq!(updated.get("Gender"), original.get("Gender"));
        assert_eq!(updated.len(), original.len());
    }

    #[test]
    fn with_field_can_add_unseen_key() {
        let updated = FeatureSet::new().with_field("Age", FeatureValue::text("29"));
        assert_eq!(updated.len(), 1);
        assert_eq!(updated.display_value("Age"), "29");
    }

    #[test]
    fn unset_and_null_render_empty() {
        let set = FeatureSet::new().with_field("Offer", FeatureValue::Null);
        assert_eq!(set.display_value("Offer"), "");
        assert_eq!(set.display_value("Missing"), "");
    }

    #[test]
    fn parses_mixed_scalar_json() {
        let json = r#"{"Age": 29, "Monthly Charge": 95.5, "Married": true, "Offer": null, "Contract": "One Year"}"#;
        let set: FeatureSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.get("Age"), Some(&FeatureValue::from(29)));
        assert_eq!(set.display_value("Monthly Charge"), "95.5");
        assert_eq!(set.get("Married"), Some(&FeatureValue::Bool(true)));
        assert!(set.get("Offer").unwrap().is_null());
        assert_eq!(set.display_value("Contract"), "One Year");
    }

    #[test]
    fn serializes_as_plain_json_object() {
        let set: FeatureSet = [("Age", FeatureValue::from(30)), ("Offer", FeatureValue::Null)]
            .into_iter()
            .collect();
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value, serde_json::json!({"Age": 30, "Offer": null}));
    }

    #[test]
    fn rejects_nested_values() {
        let result = serde_json::from_str::<FeatureSet>(r#"{"Tags": ["a", "b"]}"#);
        assert!(result.is_err());
    }
}
