//! End-to-end submit scenarios: blocked and proceeding submissions,
//! idempotent reconciliation and the scroll target.

use prefs_form_validator::page::{FormBinding, ScrollAlignment, ScrollBehavior, SubmitOutcome};
use prefs_form_validator::schema::FormRegistry;
use prefs_form_validator::snapshot::FormSnapshot;

fn registry() -> FormRegistry {
    let mut registry = FormRegistry::new();
    registry.add_embedded_preferences_form();
    registry
}

fn binding() -> FormBinding {
    FormBinding::bind(&registry(), "preferences").expect("preferences form")
}

#[test]
fn blocked_submission_shows_every_failure_and_scrolls_to_first() {
    let mut binding = binding();
    let schema = binding.schema().clone();

    // location whitespace-only, no mode selected, first price negative,
    // remaining prices fine
    let mut snapshot = FormSnapshot::new();
    snapshot.set_text("location", "  ");
    let prices = schema.price_fields();
    snapshot.set_text(&prices[0].name, "-5");
    for price in &prices[1..] {
        snapshot.set_text(&price.name, "300");
    }

    match binding.submit(&snapshot) {
        SubmitOutcome::Blocked { scroll } => {
            assert_eq!(scroll.target, "location");
            assert_eq!(scroll.behavior, ScrollBehavior::Smooth);
            assert_eq!(scroll.alignment, ScrollAlignment::Center);
        }
        SubmitOutcome::Proceed => panic!("submission should be blocked"),
    }

    // Three messages: location, notification mode, and the one bad price
    assert_eq!(binding.page().error_count(), 3);
    assert!(binding.page().display("location").unwrap().invalid);
    assert!(binding.page().display("notification_mode").unwrap().invalid);
    assert!(binding.page().display(&prices[0].name).unwrap().invalid);
}

#[test]
fn valid_submission_proceeds_with_clean_page() {
    let mut binding = binding();
    let schema = binding.schema().clone();

    let mut snapshot = FormSnapshot::new();
    snapshot.set_text("location", "Austin");
    snapshot.select("notification_mode", "only_preferred");
    for price in schema.price_fields() {
        snapshot.set_text(&price.name, "0");
    }

    assert_eq!(binding.submit(&snapshot), SubmitOutcome::Proceed);
    assert_eq!(binding.page().error_count(), 0);
    assert!(binding.page().first_invalid().is_none());
}

#[test]
fn submitting_twice_with_unchanged_values_leaves_identical_page_state() {
    let mut binding = binding();

    let mut snapshot = FormSnapshot::new();
    snapshot.set_text("location", "");

    let first = binding.submit(&snapshot);
    let page_after_first = binding.page().clone();

    let second = binding.submit(&snapshot);
    assert_eq!(first, second);
    // No duplicate error messages, no state drift
    assert_eq!(*binding.page(), page_after_first);
}

#[test]
fn fixing_one_field_clears_only_its_message() {
    let mut binding = binding();
    let schema = binding.schema().clone();

    let mut snapshot = FormSnapshot::new();
    snapshot.set_text("location", "");
    for price in schema.price_fields() {
        snapshot.set_text(&price.name, "200");
    }
    assert!(binding.submit(&snapshot).is_blocked());
    assert_eq!(binding.page().error_count(), 2);

    // Selecting a mode clears the group message; location stays flagged
    snapshot.select("notification_mode", "good_deal");
    assert!(binding.submit(&snapshot).is_blocked());
    assert_eq!(binding.page().error_count(), 1);
    assert!(!binding.page().display("notification_mode").unwrap().invalid);
    assert!(binding.page().display("location").unwrap().invalid);
}

#[test]
fn scroll_target_follows_page_order() {
    let mut binding = binding();
    let schema = binding.schema().clone();

    // Only a price field fails; the scroll target is that field, not the
    // earlier valid ones
    let mut snapshot = FormSnapshot::new();
    snapshot.set_text("location", "Austin");
    snapshot.select("notification_mode", "all");
    let prices = schema.price_fields();
    for price in &prices[..prices.len() - 1] {
        snapshot.set_text(&price.name, "100");
    }
    let last = &prices[prices.len() - 1].name;
    snapshot.set_text(last, "not a number");

    match binding.submit(&snapshot) {
        SubmitOutcome::Blocked { scroll } => assert_eq!(&scroll.target, last),
        SubmitOutcome::Proceed => panic!("submission should be blocked"),
    }
}
