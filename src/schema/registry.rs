//! Form Registry
//!
//! Simple in-memory registry of form schemas.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::form::{FieldDef, FieldKind, FormFile, FormSchema};

/// Suffix of loadable form definition files
const FORM_FILE_SUFFIX: &str = ".form.toml";

/// Simple in-memory form registry
#[derive(Debug, Clone)]
pub struct FormRegistry {
    forms: HashMap<String, FormSchema>,
}

impl Default for FormRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FormRegistry {
    pub fn new() -> Self {
        Self {
            forms: HashMap::new(),
        }
    }

    /// Add a form to the registry
    pub fn add_form(&mut self, schema: FormSchema) {
        self.forms.insert(schema.name.clone(), schema);
    }

    /// Get a registered form by name
    pub fn get_form(&self, name: &str) -> Option<&FormSchema> {
        self.forms.get(name)
    }

    /// List all registered forms
    pub fn list_forms(&self) -> Vec<&str> {
        self.forms.keys().map(|s| s.as_str()).collect()
    }

    /// Add the embedded preferences form definition
    pub fn add_embedded_preferences_form(&mut self) {
        let embedded_toml = include_str!("../../resources/forms/preferences.form.toml");

        match toml::from_str::<FormFile>(embedded_toml) {
            Ok(form_file) => {
                self.add_form(FormSchema::from(form_file));
            }
            Err(e) => {
                // Fallback to a minimal form if parsing fails
                log::warn!(
                    "Failed to parse embedded preferences form: {}. Using minimal fallback.",
                    e
                );
                self.add_minimal_preferences_form();
            }
        }
    }

    /// Minimal fallback preferences form in case embedded TOML parsing fails
    fn add_minimal_preferences_form(&mut self) {
        let schema = FormSchema {
            name: "preferences".to_string(),
            version: Some("minimal-fallback".to_string()),
            description: Some("Minimal fallback preferences form".to_string()),
            fields: vec![
                FieldDef {
                    name: "location".to_string(),
                    kind: FieldKind::Text,
                    message: "Please enter your location.".to_string(),
                    options: None,
                },
                FieldDef {
                    name: "notification_mode".to_string(),
                    kind: FieldKind::ChoiceGroup,
                    message: "Please select a notification mode.".to_string(),
                    options: Some(vec![
                        "all".to_string(),
                        "only_preferred".to_string(),
                        "near_good_deal".to_string(),
                        "good_deal".to_string(),
                    ]),
                },
            ],
        };

        self.add_form(schema);
    }

    /// Load every `*.form.toml` file from a directory
    ///
    /// Files that fail to parse are skipped with a warning; valid files
    /// override any registered form with the same name.
    pub fn load_directory(&mut self, dir: &Path) -> Result<usize> {
        let entries =
            fs::read_dir(dir).with_context(|| format!("reading form directory {:?}", dir))?;

        let mut loaded = 0;
        for entry in entries {
            let path = entry?.path();
            let is_form_file = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(FORM_FILE_SUFFIX));
            if !is_form_file {
                continue;
            }

            let content =
                fs::read_to_string(&path).with_context(|| format!("reading {:?}", path))?;
            match toml::from_str::<FormFile>(&content) {
                Ok(form_file) => {
                    let schema = FormSchema::from(form_file);
                    log::info!("Loaded form '{}' from {:?}", schema.name, path);
                    self.add_form(schema);
                    loaded += 1;
                }
                Err(e) => {
                    log::warn!("Skipping invalid form file {:?}: {}", path, e);
                }
            }
        }

        Ok(loaded)
    }
}
