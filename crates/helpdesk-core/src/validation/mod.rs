//! Validation modules

pub mod draft;

pub use draft::{validate_draft, Field, ValidationErrors, EMAIL_PATTERN};
