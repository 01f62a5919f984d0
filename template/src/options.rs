//! FILENAME: template/src/options.rs
//! PURPOSE: Serializable configuration for template substitution.
//! CONTEXT: View layers carry their pipe settings as JSON next to the
//! template. Unknown or missing settings fall back to defaults.

use serde::{Deserialize, Serialize};
use value::Record;

use crate::error::TemplateError;
use crate::pattern::TemplatePattern;
use crate::substitute::substitute_template;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateOptions {
    /// Placeholder regex with one capture group. `None` means `{{name}}`.
    pub pattern: Option<String>,
}

impl TemplateOptions {
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        TemplateOptions {
            pattern: Some(pattern.into()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The configured pattern, or the default if it is absent or invalid.
    pub fn pattern(&self) -> TemplatePattern {
        TemplatePattern::parse_or_default(self.pattern.as_deref())
    }

    pub fn substitute<V: Record + ?Sized>(
        &self,
        template: Option<&str>,
        variables: &V,
    ) -> Option<String> {
        let pattern = self.pattern();
        substitute_template(template, variables, Some(&pattern))
    }
}
