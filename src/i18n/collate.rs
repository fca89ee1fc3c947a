//! Locale-aware string comparison for category labels.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator as IcuCollator, CollatorBorrowed};
use icu_locale_core::{Locale as IcuLocale, locale};

use crate::i18n::Language;

/// Compares category labels the way a reader of the active language expects.
///
/// Backed by the CLDR collation tables compiled into ICU4X, tailored for
/// `ja` or `en`. Accents, case and kana script only break ties between
/// labels that otherwise spell the same.
pub struct Collator {
    /// Language whose collation tailoring applies.
    language: Language,
    /// ICU collator; `None` only if the compiled tables failed to load.
    inner: Option<CollatorBorrowed<'static>>,
}

/// ICU locale used for collating `language`.
fn icu_locale(language: Language) -> IcuLocale {
    match language {
        Language::Ja => locale!("ja"),
        Language::En => locale!("en"),
    }
}

impl Collator {
    /// Collator configured for `language`.
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        let inner = match IcuCollator::try_new(
            icu_locale(language).into(),
            CollatorOptions::default(),
        ) {
            Ok(collator) => Some(collator),
            Err(err) => {
                tracing::warn!(
                    language = language.locale_code(),
                    error = %err,
                    "collation data unavailable, ordering categories by code point"
                );
                None
            }
        };
        Self { language, inner }
    }

    /// Language this collator was configured for.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// What: Compare two labels.
    ///
    /// Inputs:
    /// - `a`, `b`: Labels to compare
    ///
    /// Output:
    /// - `Ordering` consistent with a total order over strings
    ///
    /// Details:
    /// - Labels the collation tables treat as equal fall back to code-point order
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.inner
            .as_ref()
            .map_or(Ordering::Equal, |collator| collator.compare(a, b))
            .then_with(|| a.cmp(b))
    }
}

impl fmt::Debug for Collator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collator")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
