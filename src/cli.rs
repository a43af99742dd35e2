//! Command-line entry point
//!
//! Loads the form registry, reads a snapshot of field values, runs one
//! submit attempt and reports the outcome.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::page::{FormBinding, SubmitOutcome};
use crate::schema::FormRegistry;
use crate::snapshot::FormSnapshot;

/// Run one validation pass
///
/// Returns `true` when submission would proceed. Rule failures are ordinary
/// report content, never errors; `Err` is reserved for unusable input
/// (missing file, malformed JSON).
pub fn run() -> Result<bool> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_default_env()
        .parse_filters(&config.log_level)
        .init();

    run_with_config(&config)
}

/// Run against an already-built configuration (useful for testing)
pub fn run_with_config(config: &Config) -> Result<bool> {
    let registry = build_registry(config);

    // An unregistered form mirrors a page without the form element: no
    // handler gets attached and submission is left alone.
    let Some(mut binding) = FormBinding::bind(&registry, &config.form) else {
        log::warn!("form '{}' is not registered; nothing to validate", config.form);
        return Ok(true);
    };

    let snapshot = read_snapshot(config)?;

    match binding.submit(&snapshot) {
        SubmitOutcome::Proceed => {
            println!("ok: form '{}' passes validation", config.form);
            Ok(true)
        }
        SubmitOutcome::Blocked { scroll } => {
            for display in binding.page().displays() {
                if let Some(message) = &display.error {
                    println!("{}: {}", display.field, message);
                }
            }
            println!(
                "blocked: {} invalid field(s), first at '{}'",
                binding.page().error_count(),
                scroll.target
            );
            Ok(false)
        }
    }
}

/// Build the registry: embedded preferences form plus any configured
/// directories, later directories overriding earlier ones by form name
fn build_registry(config: &Config) -> FormRegistry {
    let mut registry = FormRegistry::new();
    registry.add_embedded_preferences_form();

    for dir in &config.form_dirs {
        if !dir.is_dir() {
            continue;
        }
        match registry.load_directory(dir) {
            Ok(count) => log::info!("Loaded {} form(s) from {:?}", count, dir),
            Err(e) => log::warn!("Failed to load forms from {:?}: {}", dir, e),
        }
    }

    registry
}

/// Read the snapshot JSON from the configured path or stdin
fn read_snapshot(config: &Config) -> Result<FormSnapshot> {
    let raw = match &config.snapshot {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading snapshot {:?}", path))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading snapshot from stdin")?;
            buf
        }
    };

    FormSnapshot::from_json(&raw).context("parsing snapshot JSON")
}
