//! Locale file loading and parsing.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::Language;
use crate::i18n::translations::TranslationMap;

/// Japanese strings compiled into the binary.
const BUILTIN_JA_JP: &str = include_str!("../../config/locales/ja-JP.yml");
/// English strings compiled into the binary.
const BUILTIN_EN_US: &str = include_str!("../../config/locales/en-US.yml");

/// What: Load a locale YAML file and parse it into a `TranslationMap`.
///
/// Inputs:
/// - `language`: Language whose file should be read (`ja-JP.yml` or `en-US.yml`)
/// - `locales_dir`: Path to locales directory
///
/// Output:
/// - `Result<TranslationMap, String>` containing translations or error
///
/// # Errors
/// - Returns `Err` when the locale file does not exist in the locales directory
/// - Returns `Err` when the locale file cannot be read (I/O error)
/// - Returns `Err` when the locale file is empty
/// - Returns `Err` when the YAML content cannot be parsed
pub fn load_locale_file(language: Language, locales_dir: &Path) -> Result<TranslationMap, String> {
    let file_path = locales_dir.join(format!("{}.yml", language.locale_code()));

    if !file_path.exists() {
        return Err(format!("Locale file not found: {}", file_path.display()));
    }

    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read locale file {}: {e}", file_path.display()))?;

    if contents.trim().is_empty() {
        return Err(format!("Locale file is empty: {}", file_path.display()));
    }

    parse_locale_yaml(&contents).map_err(|e| {
        format!(
            "Failed to parse locale file {}: {e}. Please check YAML syntax.",
            file_path.display()
        )
    })
}

/// What: Translations compiled into the binary for `language`.
///
/// Output:
/// - Parsed map; empty (every lookup returns its key) if the embedded YAML is broken
#[must_use]
pub fn builtin_translations(language: Language) -> TranslationMap {
    let source = match language {
        Language::Ja => BUILTIN_JA_JP,
        Language::En => BUILTIN_EN_US,
    };
    parse_locale_yaml(source).unwrap_or_else(|e| {
        tracing::warn!(locale = language.locale_code(), error = %e, "embedded locale is invalid");
        TranslationMap::new()
    })
}

/// What: Parse YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: YAML file content as string
///
/// Output:
/// - `Result<TranslationMap, String>` containing parsed translations
///
/// Details:
/// - Expects top-level key matching locale code (e.g., "ja-JP:")
/// - Flattens nested structure into dot-notation keys
pub(crate) fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = HashMap::new();

    if let Some(locale_obj) = doc.as_mapping() {
        for (_locale_key, locale_value) in locale_obj {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }

    Ok(translations)
}

/// What: Recursively flatten YAML structure into dot-notation keys.
///
/// Inputs:
/// - `value`: Current YAML value
/// - `prefix`: Current key prefix (e.g., "metrics.lowStock")
/// - `translations`: Map to populate
///
/// Details:
/// - A mapping that also needs its own text uses the reserved `_` key, so
///   `metrics: { lowStock: { _: "Low", subtitle: ... } }` yields both
///   `metrics.lowStock` and `metrics.lowStock.subtitle`
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                let Some(key_str) = key.as_str() else {
                    continue;
                };
                let new_prefix = if key_str == "_" {
                    prefix.to_string()
                } else if prefix.is_empty() {
                    key_str.to_string()
                } else {
                    format!("{prefix}.{key_str}")
                };
                flatten_yaml_value(val, &new_prefix, translations);
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        _ => {}
    }
}

/// Locale loader that caches loaded translations.
pub struct LocaleLoader {
    /// Directory holding `{locale}.yml` files.
    locales_dir: PathBuf,
    /// Already parsed files keyed by language.
    cache: HashMap<Language, TranslationMap>,
}

impl LocaleLoader {
    /// What: Create a new `LocaleLoader`.
    ///
    /// Inputs:
    /// - `locales_dir`: Path to locales directory
    #[must_use]
    pub fn new(locales_dir: PathBuf) -> Self {
        Self {
            locales_dir,
            cache: HashMap::new(),
        }
    }

    /// What: Load locale file, using cache if available.
    ///
    /// # Errors
    /// - Returns `Err` when the locale file cannot be loaded (see `load_locale_file`)
    pub fn load(&mut self, language: Language) -> Result<TranslationMap, String> {
        if let Some(cached) = self.cache.get(&language) {
            return Ok(cached.clone());
        }
        match load_locale_file(language, &self.locales_dir) {
            Ok(translations) => {
                tracing::debug!(
                    locale = language.locale_code(),
                    keys = translations.len(),
                    "loaded locale file"
                );
                self.cache.insert(language, translations.clone());
                Ok(translations)
            }
            Err(e) => {
                tracing::warn!(locale = language.locale_code(), error = %e, "failed to load locale");
                Err(e)
            }
        }
    }

    /// What: Get locales directory path.
    #[must_use]
    pub fn locales_dir(&self) -> &Path {
        &self.locales_dir
    }
}
