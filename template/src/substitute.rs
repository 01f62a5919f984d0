//! FILENAME: template/src/substitute.rs
//! PURPOSE: Replaces placeholders in a template with variable values.
//! CONTEXT: One left-to-right pass over every match of the pattern. A
//! placeholder whose variable is missing, null or undefined is left exactly
//! as written, so an incomplete variable map never erases template text.

use regex::Captures;
use value::Record;

use crate::pattern::TemplatePattern;

/// Substitutes every placeholder in `template` from `variables`.
///
/// `pattern` defaults to `{{name}}`. A missing template yields `None`.
pub fn substitute_template<V: Record + ?Sized>(
    template: Option<&str>,
    variables: &V,
    pattern: Option<&TemplatePattern>,
) -> Option<String> {
    let template = template?;
    let default_pattern;
    let pattern = match pattern {
        Some(p) => p,
        None => {
            default_pattern = TemplatePattern::default();
            &default_pattern
        }
    };

    let replaced = pattern.regex().replace_all(template, |caps: &Captures<'_>| {
        let placeholder = caps.get(0).map_or("", |m| m.as_str());
        // An optional group that did not take part reads as the empty name
        let name = caps.get(1).map_or("", |m| m.as_str());

        let value = variables.field(name);
        if value.is_nullish() {
            placeholder.to_string()
        } else {
            value.to_string()
        }
    });

    Some(replaced.into_owned())
}
