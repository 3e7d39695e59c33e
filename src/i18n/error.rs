//! Error types for the i18n module.

use thiserror::Error;

/// Errors raised when free-form input is mapped onto the supported language set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The code is not one of the supported languages.
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),
}
