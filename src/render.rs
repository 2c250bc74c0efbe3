//! Placeholder substitution for template content and destination path
//! patterns. Tokens have the form `%(KEY)s`; a token whose key is not in
//! the value set is left in place untouched.

use indexmap::IndexMap;

/// Replaces every `%(KEY)s` token for each key present in `values`.
///
/// Only known keys are touched, so Django template syntax (`{% ... %}`,
/// `{{ ... }}`) and literal `%` characters pass through unchanged.
pub fn substitute(content: &str, values: &IndexMap<&'static str, String>) -> String {
    let mut result = content.to_string();
    for (key, value) in values {
        let token = format!("%({})s", key);
        if result.contains(&token) {
            result = result.replace(&token, value);
        }
    }
    result
}
