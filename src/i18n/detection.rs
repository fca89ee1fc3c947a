//! System language detection.

use std::env;

use crate::i18n::Language;

/// Environment variables consulted for the system locale, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// What: Detect the dashboard language from the process environment.
///
/// Output:
/// - `Some(Language)` when `LC_ALL`, `LC_MESSAGES` or `LANG` names a supported language
/// - `None` when no variable is set or none of them is Japanese or English
pub fn detect_system_language() -> Option<Language> {
    detect_language_with(|name| env::var(name).ok())
}

/// What: Detect the language using a caller-supplied variable lookup.
///
/// Inputs:
/// - `lookup`: Returns the value of an environment variable by name
///
/// Output:
/// - First supported language found, following `LOCALE_VARS` priority
///
/// Details:
/// - A set but unsupported variable (e.g. `de_DE.UTF-8`) stops the search, the same way
///   `LC_ALL` shadows `LANG` for other programs
pub(crate) fn detect_language_with<F>(lookup: F) -> Option<Language>
where
    F: Fn(&str) -> Option<String>,
{
    for var_name in LOCALE_VARS {
        if let Some(raw) = lookup(var_name)
            && let Some(code) = parse_locale_string(&raw)
        {
            return Language::from_code(&code);
        }
    }
    None
}

/// What: Parse a locale string from environment variables into a standardized format.
///
/// Inputs:
/// - `locale_str`: Locale string like "`ja_JP.UTF-8`", "en-US", "`en_US.utf8`"
///
/// Output:
/// - `Option<String>` with standardized format (e.g., "ja-JP") or None if invalid
///
/// Details:
/// - Removes encoding suffix (.UTF-8) and modifiers (@euro)
/// - Converts underscores to hyphens; language lowercase, region uppercase
fn parse_locale_string(locale_str: &str) -> Option<String> {
    let trimmed = locale_str.trim();
    if trimmed.is_empty() {
        return None;
    }

    let locale_part = trimmed.split(['.', '@']).next()?;
    let normalized = locale_part.replace('_', "-");
    let mut parts = normalized.split('-');
    let language = parts.next()?.to_lowercase();
    if language.is_empty() {
        return None;
    }
    match parts.next() {
        Some(region) if !region.is_empty() => Some(format!("{language}-{}", region.to_uppercase())),
        _ => Some(language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_parse_locale_string() {
        assert_eq!(parse_locale_string("ja_JP.UTF-8"), Some("ja-JP".to_string()));
        assert_eq!(parse_locale_string("en_US.utf8"), Some("en-US".to_string()));
        assert_eq!(parse_locale_string("en-us"), Some("en-US".to_string()));
        assert_eq!(parse_locale_string("ja"), Some("ja".to_string()));
        assert_eq!(parse_locale_string("de_DE@euro"), Some("de-DE".to_string()));
        assert_eq!(parse_locale_string("C"), Some("c".to_string()));
        assert_eq!(parse_locale_string("   "), None);
    }

    #[test]
    /// What: `LC_ALL` wins over `LANG`, and unsupported languages yield `None`
    fn test_detect_language_priority() {
        let vars = env_of(&[("LC_ALL", "en_US.UTF-8"), ("LANG", "ja_JP.UTF-8")]);
        assert_eq!(
            detect_language_with(|k| vars.get(k).cloned()),
            Some(Language::En)
        );

        let vars = env_of(&[("LANG", "ja_JP.UTF-8")]);
        assert_eq!(
            detect_language_with(|k| vars.get(k).cloned()),
            Some(Language::Ja)
        );

        let vars = env_of(&[("LC_MESSAGES", "de_DE.UTF-8"), ("LANG", "ja_JP.UTF-8")]);
        assert_eq!(detect_language_with(|k| vars.get(k).cloned()), None);

        assert_eq!(detect_language_with(|_| None), None);
    }
}
