//! Consistency checks for the theme catalog and stored categories.

mod validate;

pub use validate::{validate_catalog, validate_project, validate_store, ValidationResult};
