//! Validation Engine
//!
//! Clean separation of rule evaluation from display-state and CLI concerns.

pub mod engine;

pub use engine::{FieldOutcome, FieldState, validate_field, validate_form};

// Re-export common types
pub use engine::ValidationReport;
