//! Config Module
//!
//! Loading field definitions from JSON.
//!
//! - [`json`] - Field-by-field decoding of every config record
//! - [`field_def`] - The top-level field definition
//! - [`error`] - Loading errors

pub mod error;
pub mod field_def;
pub mod json;

pub use error::ConfigError;
pub use field_def::FieldDefinition;
