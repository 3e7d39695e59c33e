//! Translation table validation module.
//!
//! Checks the static tables against the rendering contract: every string is
//! displayed verbatim, so it must be non-blank and must not carry template
//! placeholders. Override fields that fall back to English are reported as
//! coverage warnings.

use crate::i18n::strings::{overrides, PartialRecord, ENGLISH_BASE};
use crate::i18n::{DisplayRecord, Language};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that would put broken text on the page
    pub errors: Vec<String>,

    /// Coverage gaps that fall back to English
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the translation tables.
pub struct TableValidator;

// Matches `{name}` / `{{name}}` style interpolation slots
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TableValidator {
    /// Validate the base record and every override entry.
    pub fn validate_all() -> ValidationReport {
        let mut report = Self::validate_base(&ENGLISH_BASE);

        for language in Language::ALL {
            let entry = overrides(language).unwrap_or(&PartialRecord::EMPTY);
            report.merge(Self::validate_override(language, entry));
        }

        report
    }

    /// Validate a base record: every field must be usable on its own.
    pub fn validate_base(base: &DisplayRecord) -> ValidationReport {
        let mut report = ValidationReport::new();
        let scope = "base";

        check_text(&mut report, scope, "title", base.title);
        check_text(&mut report, scope, "subtitle", base.subtitle);
        check_text(&mut report, scope, "ctaPrimary", base.cta_primary);
        check_text(&mut report, scope, "ctaSecondary", base.cta_secondary);
        check_text(&mut report, scope, "sectionTitle", base.section_title);
        check_features(&mut report, scope, base.features);
        check_text(&mut report, scope, "footer", base.footer);

        report
    }

    /// Validate one override entry.
    ///
    /// Present fields are checked like base fields. Absent fields on a
    /// non-canonical language produce one coverage warning.
    pub fn validate_override(language: Language, entry: &PartialRecord) -> ValidationReport {
        let mut report = ValidationReport::new();
        let scope = language.code();

        let scalars = [
            ("title", entry.title),
            ("subtitle", entry.subtitle),
            ("ctaPrimary", entry.cta_primary),
            ("ctaSecondary", entry.cta_secondary),
            ("sectionTitle", entry.section_title),
            ("footer", entry.footer),
        ];
        for (field, value) in scalars {
            if let Some(text) = value {
                check_text(&mut report, scope, field, text);
            }
        }
        if let Some(features) = entry.features {
            check_features(&mut report, scope, features);
        }

        let missing = entry.missing_fields();
        if !language.is_canonical() && !missing.is_empty() {
            report.warnings.push(format!(
                "[{}] falls back to {} for: {}",
                scope,
                Language::canonical(),
                missing.join(", ")
            ));
        }

        report
    }
}

fn check_text(report: &mut ValidationReport, scope: &str, field: &str, text: &str) {
    if text.trim().is_empty() {
        report.errors.push(format!("[{}] {} is blank", scope, field));
        return;
    }

    let placeholders = extract_placeholders(text);
    if !placeholders.is_empty() {
        report.errors.push(format!(
            "[{}] {} contains unresolved placeholders: {:?}",
            scope, field, placeholders
        ));
    }
}

fn check_features(report: &mut ValidationReport, scope: &str, features: &[&str]) {
    if features.is_empty() {
        report
            .errors
            .push(format!("[{}] features list is empty", scope));
        return;
    }

    for (i, feature) in features.iter().enumerate() {
        check_text(report, scope, &format!("features[{}]", i), feature);
    }
}

fn extract_placeholders(text: &str) -> Vec<String> {
    let regex = PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{+\s*[A-Za-z_][A-Za-z0-9_]*\s*\}+").unwrap());

    regex
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
