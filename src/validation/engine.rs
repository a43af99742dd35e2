//! Validation Engine
//!
//! Pure rule evaluation over a value snapshot. No display mutation here -
//! rendering the outcomes is the `page` module's job.

use crate::schema::{FieldDef, FieldKind, FormSchema};
use crate::snapshot::FormSnapshot;

/// Display state of a field, derived from its current value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldState {
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldState::Valid)
    }
}

/// Outcome of evaluating one field's rule
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutcome {
    pub field: String,
    pub state: FieldState,
}

/// Result of validating a form submission
///
/// Outcomes stay in page order so the first invalid entry is the scroll
/// target on a blocked submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub outcomes: Vec<FieldOutcome>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.state.is_valid())
    }

    pub fn first_invalid(&self) -> Option<&FieldOutcome> {
        self.outcomes.iter().find(|o| !o.state.is_valid())
    }

    pub fn invalid_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.state.is_valid()).count()
    }
}

/// Evaluate one field's rule against the snapshot
pub fn validate_field(def: &FieldDef, snapshot: &FormSnapshot) -> FieldState {
    let passed = match def.kind {
        // Whitespace-only text counts as empty
        FieldKind::Text => !snapshot.text(&def.name).trim().is_empty(),
        // Unknown option names do not count as a selection
        FieldKind::ChoiceGroup => snapshot
            .selected(&def.name)
            .iter()
            .any(|option| def.has_option(option)),
        FieldKind::Price => parse_price(snapshot.text(&def.name)).is_some(),
    };

    if passed {
        FieldState::Valid
    } else {
        FieldState::Invalid(def.message.clone())
    }
}

/// Validate an entire form submission
///
/// Every rule is evaluated even after a failure so all invalid fields are
/// flagged at once, not just the first one.
pub fn validate_form(snapshot: &FormSnapshot, schema: &FormSchema) -> ValidationReport {
    let mut report = ValidationReport::new();

    for def in &schema.fields {
        report.outcomes.push(FieldOutcome {
            field: def.name.clone(),
            state: validate_field(def, snapshot),
        });
    }

    report
}

/// Parse a price input
///
/// Empty, non-numeric and negative values are all rejected the same way.
fn parse_price(raw: &str) -> Option<i64> {
    let value: i64 = raw.trim().parse().ok()?;
    (value >= 0).then_some(value)
}
