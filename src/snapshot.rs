//! Form Snapshot
//!
//! Structured capture of every field value at the moment of a submit
//! attempt. Pure data, no validation logic - rules live in `validation`.

use serde::Deserialize;
use std::collections::HashMap;

/// Current value of a single input
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Raw text content of a text or number input
    Text(String),
    /// Names of the selected members of a choice group
    Choices(Vec<String>),
}

/// Snapshot of current form values, keyed by field name
///
/// A field missing from the snapshot is an input the user never touched and
/// reads back as empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    values: HashMap<String, FieldValue>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the text content of an input
    pub fn set_text(&mut self, field: &str, value: &str) {
        self.values
            .insert(field.to_string(), FieldValue::Text(value.to_string()));
    }

    /// Record one selected member of a choice group
    pub fn select(&mut self, group: &str, option: &str) {
        match self.values.get_mut(group) {
            Some(FieldValue::Choices(selected)) => {
                if !selected.iter().any(|o| o == option) {
                    selected.push(option.to_string());
                }
            }
            _ => {
                self.values.insert(
                    group.to_string(),
                    FieldValue::Choices(vec![option.to_string()]),
                );
            }
        }
    }

    /// Text content of an input; empty for missing or non-text values
    pub fn text(&self, field: &str) -> &str {
        match self.values.get(field) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    /// Selected members of a choice group; empty for missing or non-group values
    pub fn selected(&self, group: &str) -> &[String] {
        match self.values.get(group) {
            Some(FieldValue::Choices(selected)) => selected,
            _ => &[],
        }
    }

    /// Parse a snapshot from its JSON representation
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
