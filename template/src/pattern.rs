//! FILENAME: template/src/pattern.rs
//! PURPOSE: The placeholder matcher used by template substitution.
//! CONTEXT: A pattern is a regular expression with exactly one capture
//! group, the variable name. The default recognises `{{name}}`, with
//! optional whitespace inside the braces.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TemplateError;

/// Source of the default `{{name}}` placeholder pattern.
pub const DEFAULT_PATTERN: &str = r"\{\{\s*([^{}\s]*)\s*\}\}";

static DEFAULT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_PATTERN).expect("default placeholder pattern compiles"));

/// A compiled placeholder matcher.
#[derive(Debug, Clone)]
pub struct TemplatePattern {
    regex: Regex,
}

impl TemplatePattern {
    /// Compiles `source`. The expression must have exactly one capture group.
    pub fn new(source: &str) -> Result<Self, TemplateError> {
        Self::from_regex(Regex::new(source)?)
    }

    /// Wraps an already compiled expression.
    pub fn from_regex(regex: Regex) -> Result<Self, TemplateError> {
        // captures_len() counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found != 1 {
            return Err(TemplateError::CaptureGroups { found });
        }
        Ok(TemplatePattern { regex })
    }

    /// Compiles `source`, falling back to the default pattern when it is
    /// absent or unusable.
    pub fn parse_or_default(source: Option<&str>) -> Self {
        let Some(source) = source else {
            return Self::default();
        };
        match Self::new(source) {
            Ok(pattern) => pattern,
            Err(e) => {
                log::warn!(
                    "Ignoring placeholder pattern {:?} ({}); using {:?}",
                    source,
                    e,
                    DEFAULT_PATTERN
                );
                Self::default()
            }
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Default for TemplatePattern {
    fn default() -> Self {
        TemplatePattern {
            regex: DEFAULT_REGEX.clone(),
        }
    }
}
