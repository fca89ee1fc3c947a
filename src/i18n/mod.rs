//! Internationalization (i18n) for the dashboard.
//!
//! Two languages are supported, Japanese (`ja-JP`, the default) and English
//! (`en-US`). Everything shown to a reader goes through [`Locale`]:
//!
//! - **Translation lookup**: [`Locale::t`] returns the string for a dot-notation
//!   key in the active language, or the key itself when it is missing.
//! - **Product names**: [`Locale::product_name`] picks the name field of the active language.
//! - **Dates and numbers**: [`Locale::format_datetime`] renders in store time (UTC+9).
//! - **Category order**: [`Locale::collator`] compares category labels.
//!
//! # Locale Files
//!
//! Strings live in `config/locales/{locale}.yml`, nested YAML flattened into
//! dot-notation keys:
//!
//! ```yaml
//! ja-JP:
//!   alert:
//!     critical: "緊急在庫不足"
//! ```
//!
//! becomes `alert.critical`. A mapping that needs its own text uses the `_` key.
//! The same files are compiled into the binary and used when no locales directory
//! is found on disk.
//!
//! # Usage
//!
//! ```rust
//! use shelfwatch::i18n::{Language, Locale};
//!
//! let locale = Locale::builtin(Language::En);
//! assert_eq!(locale.t("alert.noDelivery"), "No Delivery Scheduled");
//! assert_eq!(locale.t("no.such.key"), "no.such.key");
//! ```

mod collate;
mod detection;
mod format;
mod loader;
pub mod translations;

pub use collate::Collator;
pub use detection::detect_system_language;
pub use format::{format_count, format_datetime, format_hours, format_rate};
pub use loader::{LocaleLoader, builtin_translations, load_locale_file};
pub use translations::{TranslationMap, translate, translate_or_key};

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::state::Product;

/// A dashboard language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Japanese (`ja-JP`).
    #[default]
    Ja,
    /// English (`en-US`).
    En,
}

impl Language {
    /// BCP 47 code used for locale file names.
    #[must_use]
    pub const fn locale_code(&self) -> &'static str {
        match self {
            Self::Ja => "ja-JP",
            Self::En => "en-US",
        }
    }

    /// What: Parse a language from a config or CLI value.
    ///
    /// Inputs:
    /// - `code`: e.g. "ja", "ja-JP", "`en_US`", "EN" (case-insensitive)
    ///
    /// Output:
    /// - `Some(Language)` for Japanese or English; `None` otherwise
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_lowercase().replace('_', "-");
        let primary = normalized.split('-').next().unwrap_or_default();
        match primary {
            "ja" | "jp" | "japanese" => Some(Self::Ja),
            "en" | "english" => Some(Self::En),
            _ => None,
        }
    }

    /// The other language; backs the language switcher.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ja => Self::En,
            Self::En => Self::Ja,
        }
    }
}

/// What: Resolve the language from a configured value.
///
/// Inputs:
/// - `configured`: Value from settings or CLI; empty or `auto` means detect
///
/// Output:
/// - Configured language, else the system language, else Japanese
///
/// Details:
/// - Unrecognized values are logged and treated like `auto`
#[must_use]
pub fn resolve_language(configured: &str) -> Language {
    let trimmed = configured.trim();
    if !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("auto") {
        if let Some(language) = Language::from_code(trimmed) {
            return language;
        }
        tracing::warn!(value = trimmed, "unsupported language setting; detecting from environment");
    }
    detect_system_language().unwrap_or_default()
}

/// What: Find the locales directory in development and installed locations.
///
/// Output:
/// - `Some(PathBuf)` pointing to the first existing locales directory found, or `None`
///
/// Details:
/// - Tries `CARGO_MANIFEST_DIR/config/locales` first, then `/usr/share/shelfwatch/locales`
pub fn find_locales_dir() -> Option<PathBuf> {
    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("locales");
    if dev_path.is_dir() {
        return Some(dev_path);
    }

    let installed_path = PathBuf::from("/usr/share/shelfwatch/locales");
    if installed_path.is_dir() {
        return Some(installed_path);
    }

    None
}

/// Active language together with its translation table.
#[derive(Debug, Clone)]
pub struct Locale {
    /// Language used for lookups and formatting.
    language: Language,
    /// Strings of `language`.
    translations: TranslationMap,
}

impl Locale {
    /// Locale over an explicit translation table.
    #[must_use]
    pub const fn new(language: Language, translations: TranslationMap) -> Self {
        Self {
            language,
            translations,
        }
    }

    /// Locale backed by the translations compiled into the binary.
    #[must_use]
    pub fn builtin(language: Language) -> Self {
        Self::new(language, builtin_translations(language))
    }

    /// What: Load the locale from disk, falling back to the embedded strings.
    ///
    /// Inputs:
    /// - `language`: Language to load
    ///
    /// Output:
    /// - `Locale`; never fails
    #[must_use]
    pub fn load(language: Language) -> Self {
        let from_disk = find_locales_dir()
            .and_then(|dir| LocaleLoader::new(dir).load(language).ok());
        match from_disk {
            Some(translations) => Self::new(language, translations),
            None => {
                tracing::debug!(
                    locale = language.locale_code(),
                    "using embedded translations"
                );
                Self::builtin(language)
            }
        }
    }

    /// Active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// What: Translate `key` in the active language.
    ///
    /// Output:
    /// - Translated string, or the key itself when absent
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        translate_or_key(key, &self.translations)
    }

    /// What: Translate `key` and fill its `{}` placeholders in order.
    #[must_use]
    pub fn t_fmt(&self, key: &str, args: &[&dyn std::fmt::Display]) -> String {
        translations::fill_placeholders(&self.t(key), args)
    }

    /// Display name of `product` in the active language.
    #[must_use]
    pub fn product_name<'a>(&self, product: &'a Product) -> &'a str {
        match self.language {
            Language::Ja => &product.name_ja,
            Language::En => &product.name_en,
        }
    }

    /// What: Localized label of a category.
    ///
    /// Output:
    /// - Translation of `category.<lowercase>` when the table has it, else `category` as given
    #[must_use]
    pub fn category_label(&self, category: &str) -> String {
        let key = format!("category.{}", category.trim().to_lowercase());
        translate(&key, &self.translations).unwrap_or_else(|| category.to_string())
    }

    /// Timestamp in store time, laid out for the active language.
    #[must_use]
    pub fn format_datetime(&self, ts: DateTime<Utc>) -> String {
        format_datetime(ts, self.language)
    }

    /// Collator for ordering category labels in the active language.
    #[must_use]
    pub fn collator(&self) -> Collator {
        Collator::for_language(self.language)
    }
}
