//! Language registry: metadata for every supported language.
//!
//! The registry backs the language picker. It uses a singleton pattern with
//! `OnceLock` so the table is built once and shared read-only afterwards.

use crate::i18n::Language;
use serde::Serialize;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    #[serde(skip)]
    pub language: Language,

    /// ISO 639-1 language code (e.g., "en", "ml")
    pub code: &'static str,

    /// English name of the language (e.g., "Malayalam")
    pub name: &'static str,

    /// Picker label, native name first (e.g., "മലയാളം (Malayalam)")
    pub label: &'static str,

    /// Whether this is the base-record language (only one should be true)
    #[serde(rename = "canonical")]
    pub is_canonical: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Codes match the way `Language::from_code` parses them (trimmed, any
    /// ASCII case).
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        Language::from_code(code).ok().map(|lang| self.entry(lang))
    }

    /// Registry entry for a language.
    ///
    /// `default_languages` holds exactly one entry per variant, in
    /// `Language::ALL` order, so the lookup is an index.
    pub fn entry(&self, language: Language) -> &LanguageConfig {
        let index = Language::ALL
            .iter()
            .position(|lang| *lang == language)
            .unwrap_or(0);
        &self.languages[index]
    }

    /// All languages in picker order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language or more than one is defined (this
    /// indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default language configurations, one per `Language` variant.
fn default_languages() -> Vec<LanguageConfig> {
    Language::ALL
        .into_iter()
        .map(|language| {
            let (name, label) = names(language);
            LanguageConfig {
                language,
                code: language.code(),
                name,
                label,
                is_canonical: language == Language::En,
            }
        })
        .collect()
}

fn names(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::En => ("English", "English"),
        Language::Fr => ("French", "Français"),
        Language::Nl => ("Dutch", "Nederlands"),
        Language::De => ("German", "Deutsch"),
        Language::Es => ("Spanish", "Español"),
        Language::Pt => ("Portuguese", "Português"),
        Language::Hi => ("Hindi", "हिन्दी (Hindi)"),
        Language::Ml => ("Malayalam", "മലയാളം (Malayalam)"),
        Language::Ta => ("Tamil", "தமிழ் (Tamil)"),
        Language::Ar => ("Arabic", "العربية (Arabic)"),
        Language::Zh => ("Chinese", "中文 (Chinese)"),
        Language::Ja => ("Japanese", "日本語 (Japanese)"),
        Language::Ru => ("Russian", "Русский (Russian)"),
    }
}
