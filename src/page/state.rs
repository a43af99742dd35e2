//! Display State
//!
//! Explicit model of what the page shows per field: an invalid marker plus
//! at most one attached error message. Reconciling against a validation
//! report is an idempotent toggle, never an unconditional create/remove.

use crate::schema::FormSchema;
use crate::validation::{FieldState, ValidationReport};

/// Visible validation state of one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDisplay {
    pub field: String,
    /// Whether the invalid marker is applied
    pub invalid: bool,
    /// Error message attached directly after the field, if any
    pub error: Option<String>,
}

impl FieldDisplay {
    fn blank(field: &str) -> Self {
        Self {
            field: field.to_string(),
            invalid: false,
            error: None,
        }
    }
}

/// Rendered validation state of the whole form
///
/// Invariant: a display holds an error message if and only if it is marked
/// invalid. `reconcile` re-establishes this on every pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    displays: Vec<FieldDisplay>,
}

impl PageState {
    /// Fresh page state for a schema: every field valid, no messages
    pub fn for_schema(schema: &FormSchema) -> Self {
        Self {
            displays: schema
                .fields
                .iter()
                .map(|f| FieldDisplay::blank(&f.name))
                .collect(),
        }
    }

    /// All field displays, in page order
    pub fn displays(&self) -> &[FieldDisplay] {
        &self.displays
    }

    /// Display state of a single field
    pub fn display(&self, field: &str) -> Option<&FieldDisplay> {
        self.displays.iter().find(|d| d.field == field)
    }

    /// First field currently marked invalid, in page order
    pub fn first_invalid(&self) -> Option<&FieldDisplay> {
        self.displays.iter().find(|d| d.invalid)
    }

    /// Number of attached error messages
    pub fn error_count(&self) -> usize {
        self.displays.iter().filter(|d| d.error.is_some()).count()
    }

    /// Apply a validation report to the visible state
    ///
    /// Failing fields get the invalid marker and exactly one message,
    /// created only if absent; passing fields lose both. Applying the same
    /// report twice leaves the state unchanged.
    pub fn reconcile(&mut self, report: &ValidationReport) {
        for outcome in &report.outcomes {
            let Some(display) = self.displays.iter_mut().find(|d| d.field == outcome.field)
            else {
                continue;
            };

            match &outcome.state {
                FieldState::Valid => {
                    display.invalid = false;
                    display.error = None;
                }
                FieldState::Invalid(message) => {
                    display.invalid = true;
                    if display.error.as_deref() != Some(message) {
                        display.error = Some(message.clone());
                    }
                }
            }
        }
    }
}
