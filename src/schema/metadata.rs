//! Field schema served by the backend's `/meta` endpoint.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::features::FeatureValue;

/// Field list, categorical choices and defaults for the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Ordered, unique field names the model expects.
    pub expected_cols: Vec<String>,
    /// Allowed values per categorical field. Absent fields are free text.
    #[serde(default)]
    pub categorical_options: BTreeMap<String, Vec<String>>,
    /// Default per field, used as placeholder text.
    #[serde(default)]
    pub defaults: BTreeMap<String, FeatureValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("Field '{0}' is listed more than once in expected_cols")]
    DuplicateField(String),
}

impl FieldMetadata {
    /// Reject schemas whose field list repeats a name.
    pub fn validate(&self) -> Result<(), MetadataError> {
        let mut seen = HashSet::with_capacity(self.expected_cols.len());
        for name in &self.expected_cols {
            if !seen.insert(name.as_str()) {
                return Err(MetadataError::DuplicateField(name.clone()));
            }
        }
        Ok(())
    }

    /// Declared choices when `field` is categorical.
    pub fn options_for(&self, field: &str) -> Option<&[String]> {
        self.categorical_options.get(field).map(Vec::as_slice)
    }

    pub fn is_categorical(&self, field: &str) -> bool {
        self.options_for(field).is_some()
    }

    /// Placeholder text for a free-text control.
    pub fn placeholder_for(&self, field: &str) -> String {
        self.defaults
            .get(field)
            .map(FeatureValue::display_text)
            .unwrap_or_default()
    }

    pub fn field_count(&self) -> usize {
        self.expected_cols.len()
    }
}
