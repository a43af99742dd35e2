//! Form Definitions
//!
//! Form schemas and the registry that holds them.

pub mod form;
pub mod registry;

pub use form::{FieldDef, FieldKind, FormFile, FormMeta, FormSchema};
pub use registry::FormRegistry;
