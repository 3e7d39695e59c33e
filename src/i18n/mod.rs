//! Internationalization (i18n) module for the landing page.
//!
//! All language-related logic, the translation tables and the resolver live
//! here. The rest of the crate only sees fully resolved [`DisplayRecord`]s.
//!
//! # Architecture
//!
//! - `language`: the closed `Language` enum of supported codes
//! - `registry`: picker metadata (names, labels, canonical language)
//! - `strings`: the English base record and per-language overrides
//! - `resolver`: override-else-base merge producing a `DisplayRecord`
//! - `validator`: checks the static tables against the rendering contract
//! - `metrics`: resolution counters
//!
//! # Example
//!
//! ```rust
//! use online_travel_landing::i18n::{resolve, Language};
//!
//! let german = resolve(Language::De);
//! assert_eq!(german.cta_primary, "Reise planen");
//!
//! // Sections German does not translate fall back to English
//! assert_eq!(german.section_title, "What you can do on this site");
//! ```

mod error;
mod language;
mod metrics;
mod registry;
mod resolver;
mod strings;
mod validator;

pub use error::I18nError;
pub use language::Language;
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{fallback_fields, resolve, resolve_code};
pub use strings::{overrides, DisplayRecord, PartialRecord, ENGLISH_BASE};
pub use validator::{TableValidator, ValidationReport};
