//! Preferences Form Validator
//!
//! The client-side validation engine of the admin preferences panel,
//! rebuilt as a library.
//!
//! This library provides:
//! - Form definitions loaded from TOML
//! - Pure rule evaluation over snapshots of field values
//! - Idempotent reconciliation of the visible error state
//! - Submit decisions (proceed, or block and scroll to the first failure)

pub mod cli;
pub mod config;
pub mod page;
pub mod schema;
pub mod snapshot;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use page::{FormBinding, PageState, SubmitOutcome};
pub use schema::{FormRegistry, FormSchema};
pub use snapshot::{FieldValue, FormSnapshot};
pub use validation::{FieldState, ValidationReport, validate_form};
