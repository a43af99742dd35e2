//! Page State
//!
//! Visible error state of the form and the submit decision built on top of
//! it. Rule evaluation stays in `validation`; this module only renders its
//! outcomes and decides whether submission proceeds.

pub mod state;
pub mod submit;

pub use state::{FieldDisplay, PageState};
pub use submit::{FormBinding, ScrollAlignment, ScrollBehavior, ScrollRequest, SubmitOutcome};
