//! FILENAME: template/src/lib.rs
//! PURPOSE: Library root for the template substitution pipe.
//! CONTEXT: Exposes the placeholder pattern, the substitution pass and the
//! serializable options a view layer uses to configure them.
//!
//! PIPELINE: Template String --> Pattern Matches --> Variable Lookup --> String
//!
//! SUPPORTED FEATURES:
//! - Default placeholders: {{name}}, {{ name }}
//! - Custom placeholder regex with one capture group
//! - Missing/null variables keep their placeholder text
//! - Numbers, booleans and arrays render in their canonical string form

pub mod error;
pub mod options;
pub mod pattern;
pub mod substitute;


pub use error::TemplateError;
pub use options::TemplateOptions;
pub use pattern::{TemplatePattern, DEFAULT_PATTERN};
pub use substitute::substitute_template;
