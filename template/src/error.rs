//! FILENAME: template/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Invalid placeholder pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("Placeholder pattern must capture exactly one group, found {found}")]
    CaptureGroups { found: usize },

    #[error("Invalid template options: {0}")]
    Options(#[from] serde_json::Error),
}
