//! Language type: the closed set of languages the landing page ships.
//!
//! Every supported language is a variant of [`Language`], so lookups into the
//! translation tables are exhaustive matches rather than string comparisons.
//! Free-form codes (query strings, env vars) enter through [`Language::from_code`].

use crate::i18n::{I18nError, LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Nl,
    De,
    Es,
    Pt,
    Hi,
    Ml,
    Ta,
    Ar,
    Zh,
    Ja,
    Ru,
}

impl Language {
    /// Every supported language, in the order the picker shows them.
    pub const ALL: [Language; 13] = [
        Language::En,
        Language::Fr,
        Language::Nl,
        Language::De,
        Language::Es,
        Language::Pt,
        Language::Hi,
        Language::Ml,
        Language::Ta,
        Language::Ar,
        Language::Zh,
        Language::Ja,
        Language::Ru,
    ];

    /// Create a Language from a language code string.
    ///
    /// Matching ignores surrounding whitespace and ASCII case, so `" FR "`
    /// resolves to [`Language::Fr`].
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is supported
    /// * `Err(I18nError::UnknownLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        let normalized = code.trim();

        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| I18nError::UnknownLanguage(code.to_string()))
    }

    /// The canonical language: the one the base record is written in.
    pub fn canonical() -> Language {
        LanguageRegistry::get().canonical().language
    }

    /// ISO 639-1 language code (e.g., "en", "ml").
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Nl => "nl",
            Language::De => "de",
            Language::Es => "es",
            Language::Pt => "pt",
            Language::Hi => "hi",
            Language::Ml => "ml",
            Language::Ta => "ta",
            Language::Ar => "ar",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Ru => "ru",
        }
    }

    /// Full registry entry for this language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().entry(*self)
    }

    /// English name of the language (e.g., "Malayalam").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Label shown in the language picker (e.g., "മലയാളം (Malayalam)").
    pub fn label(&self) -> &'static str {
        self.config().label
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Whether text in this language is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
