//! Error types for spellout.

use thiserror::Error;

/// Result type for spellout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can surface past the normalization boundary.
///
/// Per-match rewrite failures never appear here: a rule that cannot
/// transform a match leaves that match untouched and carries on.
#[derive(Error, Debug)]
pub enum Error {
    /// No normalizer strategy is registered for the requested language.
    #[error("Language '{0}' is not supported.")]
    UnsupportedLanguage(String),
}
