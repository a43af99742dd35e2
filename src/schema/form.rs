//! Form Schema Types
//!
//! Types describing a validated form: which fields exist, what kind of rule
//! each one carries, and the message shown when the rule fails.

use serde::Deserialize;

/// Root form file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FormFile {
    pub form: FormMeta,
    pub fields: Vec<FieldDef>,
}

/// Form metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FormMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Runtime form schema
///
/// Fields stay in page order: the first invalid field decides where the
/// viewport scrolls on a blocked submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<FieldDef>,
}

/// One validated field definition
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
    /// Message attached after the field while its rule fails
    pub message: String,
    /// Selectable option names (choice groups only)
    pub options: Option<Vec<String>>,
}

/// Kind of rule a field carries
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, required after trimming whitespace
    Text,
    /// Group of checkable inputs; at least one must be selected
    ChoiceGroup,
    /// Integer amount that must be zero or greater
    Price,
}

impl From<FormFile> for FormSchema {
    fn from(file: FormFile) -> Self {
        Self {
            name: file.form.name,
            version: file.form.version,
            description: file.form.description,
            fields: file.fields,
        }
    }
}

impl FormSchema {
    /// Find a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields carrying a price rule
    pub fn price_fields(&self) -> Vec<&FieldDef> {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::Price)
            .collect()
    }
}

impl FieldDef {
    /// Check whether an option name belongs to this choice group
    pub fn has_option(&self, name: &str) -> bool {
        self.options
            .as_ref()
            .map(|options| options.iter().any(|o| o == name))
            .unwrap_or(false)
    }
}
