//! Submit Flow
//!
//! One submit attempt: evaluate every rule, reconcile the visible error
//! state, then let the native submission proceed or block it and scroll to
//! the first invalid field.

use crate::schema::{FormRegistry, FormSchema};
use crate::snapshot::FormSnapshot;
use crate::validation::validate_form;

use super::state::PageState;

/// How the viewport moves to a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollBehavior {
    Smooth,
}

/// Where the target field ends up in the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAlignment {
    Center,
}

/// Request to bring a field into view
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub target: String,
    pub behavior: ScrollBehavior,
    pub alignment: ScrollAlignment,
}

impl ScrollRequest {
    fn to(target: &str) -> Self {
        Self {
            target: target.to_string(),
            behavior: ScrollBehavior::Smooth,
            alignment: ScrollAlignment::Center,
        }
    }
}

/// Decision taken on a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every rule passed; the native submission goes ahead
    Proceed,
    /// At least one rule failed; submission is cancelled and the viewport
    /// moves to the first invalid field
    Blocked { scroll: ScrollRequest },
}

impl SubmitOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitOutcome::Blocked { .. })
    }
}

/// A form wired up for submit interception
#[derive(Debug, Clone)]
pub struct FormBinding {
    schema: FormSchema,
    page: PageState,
}

impl FormBinding {
    /// Bind to a registered form
    ///
    /// Returns `None` when the form is not registered, so the caller skips
    /// handler registration instead of failing.
    pub fn bind(registry: &FormRegistry, name: &str) -> Option<Self> {
        registry
            .get_form(name)
            .cloned()
            .map(Self::for_schema)
    }

    /// Bind directly to a schema
    pub fn for_schema(schema: FormSchema) -> Self {
        let page = PageState::for_schema(&schema);
        Self { schema, page }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Handle one submit attempt
    ///
    /// Rules are always re-evaluated in full; nothing from a previous
    /// attempt is cached.
    pub fn submit(&mut self, snapshot: &FormSnapshot) -> SubmitOutcome {
        let report = validate_form(snapshot, &self.schema);
        self.page.reconcile(&report);

        match report.first_invalid() {
            None => {
                log::debug!("form '{}': submission proceeds", self.schema.name);
                SubmitOutcome::Proceed
            }
            Some(outcome) => {
                log::debug!(
                    "form '{}': submission blocked, {} invalid field(s)",
                    self.schema.name,
                    report.invalid_count()
                );
                SubmitOutcome::Blocked {
                    scroll: ScrollRequest::to(&outcome.field),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> FormRegistry {
        let mut registry = FormRegistry::new();
        registry.add_embedded_preferences_form();
        registry
    }

    fn valid_snapshot(schema: &FormSchema) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new();
        snapshot.set_text("location", "Austin");
        snapshot.select("notification_mode", "good_deal");
        for price in schema.price_fields() {
            snapshot.set_text(&price.name, "0");
        }
        snapshot
    }

    #[test]
    fn test_bind_unknown_form_skips_registration() {
        assert!(FormBinding::bind(&registry(), "checkout").is_none());
    }

    #[test]
    fn test_valid_submission_proceeds() {
        let registry = registry();
        let mut binding = FormBinding::bind(&registry, "preferences").unwrap();
        let snapshot = valid_snapshot(binding.schema());

        assert_eq!(binding.submit(&snapshot), SubmitOutcome::Proceed);
        assert_eq!(binding.page().error_count(), 0);
    }

    #[test]
    fn test_blocked_submission_scrolls_to_first_invalid() {
        let registry = registry();
        let mut binding = FormBinding::bind(&registry, "preferences").unwrap();

        let mut snapshot = valid_snapshot(binding.schema());
        snapshot.set_text("location", " ");

        match binding.submit(&snapshot) {
            SubmitOutcome::Blocked { scroll } => {
                assert_eq!(scroll.target, "location");
                assert_eq!(scroll.behavior, ScrollBehavior::Smooth);
                assert_eq!(scroll.alignment, ScrollAlignment::Center);
            }
            SubmitOutcome::Proceed => panic!("submission should be blocked"),
        }
    }

    #[test]
    fn test_resubmit_after_fix_clears_errors() {
        let registry = registry();
        let mut binding = FormBinding::bind(&registry, "preferences").unwrap();

        let mut snapshot = valid_snapshot(binding.schema());
        snapshot.set_text("location", "");
        assert!(binding.submit(&snapshot).is_blocked());
        assert_eq!(binding.page().error_count(), 1);

        snapshot.set_text("location", "Austin");
        assert_eq!(binding.submit(&snapshot), SubmitOutcome::Proceed);
        assert_eq!(binding.page().error_count(), 0);
    }
}
