//! Translation map and lookup utilities.

use std::collections::HashMap;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up a translation in the translation map.
///
/// Inputs:
/// - `key`: Dot-notation key (e.g., "alert.critical")
/// - `translations`: Translation map to search
///
/// Output:
/// - `Option<String>` containing translation or None if not found
#[must_use]
pub fn translate(key: &str, translations: &TranslationMap) -> Option<String> {
    translations.get(key).cloned()
}

/// What: Look up a translation, returning the key itself when it is missing.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Translation map of the active language
///
/// Output:
/// - Translated string, or `key` unchanged
///
/// Details:
/// - No cross-language fallback: a Japanese table missing a key shows the key
/// - Missing keys are logged at debug level
pub fn translate_or_key(key: &str, translations: &TranslationMap) -> String {
    if let Some(translation) = translations.get(key) {
        return translation.clone();
    }
    tracing::debug!(key, "missing translation key, returning key as-is");
    key.to_string()
}

/// What: Substitute `{}` placeholders in order.
///
/// Inputs:
/// - `template`: Text with zero or more `{}` placeholders
/// - `args`: Values for the placeholders, first to first
///
/// Output:
/// - Formatted string; surplus args are ignored and surplus placeholders stay as `{}`
#[must_use]
pub fn fill_placeholders(template: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("{}") {
        result.push_str(&rest[..pos]);
        let filled = args
            .next()
            .map_or_else(|| "{}".to_string(), ToString::to_string);
        result.push_str(&filled);
        rest = &rest[pos + 2..];
    }
    result.push_str(rest);
    result
}
