//! Translation resolver: turns a language into a complete display record.
//!
//! Each scalar field prefers the language override and falls back to
//! [`ENGLISH_BASE`]. The feature list is all-or-nothing: an override list
//! replaces the base list entirely, it is never merged entry by entry.

use crate::i18n::strings::{overrides, PartialRecord, ENGLISH_BASE};
use crate::i18n::{DisplayRecord, Language, ResolutionMetrics};
use tracing::{debug, warn};

/// Resolve the landing page text for a supported language.
///
/// A language without an override entry and a language with an empty entry
/// both resolve to the base record.
pub fn resolve(language: Language) -> DisplayRecord {
    let entry = overrides(language).unwrap_or(&PartialRecord::EMPTY);
    let record = merge(entry, &ENGLISH_BASE);

    let used_override = *entry != PartialRecord::EMPTY;
    ResolutionMetrics::global().record_resolution(used_override);
    debug!(
        "Resolved landing text for '{}' (override: {})",
        language, used_override
    );

    record
}

/// Resolve from free-form input such as a query string.
///
/// A missing code resolves `fallback`. Unknown codes never error: they log a
/// warning, count in the metrics and also resolve `fallback`, so the page
/// always has text to show. Returns the language actually used.
pub fn resolve_code(code: Option<&str>, fallback: Language) -> (Language, DisplayRecord) {
    let language = match code {
        None => fallback,
        Some(code) => Language::from_code(code).unwrap_or_else(|e| {
            warn!("{}, falling back to '{}'", e, fallback);
            ResolutionMetrics::global().record_unknown_code();
            fallback
        }),
    };

    (language, resolve(language))
}

/// Names of the fields that fall back to the base record for a language.
pub fn fallback_fields(language: Language) -> Vec<&'static str> {
    overrides(language)
        .unwrap_or(&PartialRecord::EMPTY)
        .missing_fields()
}

fn merge(entry: &PartialRecord, base: &DisplayRecord) -> DisplayRecord {
    DisplayRecord {
        title: entry.title.unwrap_or(base.title),
        subtitle: entry.subtitle.unwrap_or(base.subtitle),
        cta_primary: entry.cta_primary.unwrap_or(base.cta_primary),
        cta_secondary: entry.cta_secondary.unwrap_or(base.cta_secondary),
        section_title: entry.section_title.unwrap_or(base.section_title),
        features: entry.features.unwrap_or(base.features),
        footer: entry.footer.unwrap_or(base.footer),
    }
}
