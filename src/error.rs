//! Error types for bootlint.

use thiserror::Error;

/// Errors that can abort a lint pass or a CLI invocation.
///
/// A rule finding nothing to flag is never an error; rules return an empty
/// diagnostic list for that case.
#[derive(Debug, Error)]
pub enum BootlintError {
    /// The document query layer rejected a selector.
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Lint pass completed and reported diagnostics.
    #[error("lint failed: {0}")]
    LintFailed(String),
}

impl BootlintError {
    /// Short machine-readable code used by robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Selector { .. } => "invalid_selector",
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
            Self::NotFound(_) => "not_found",
            Self::LintFailed(_) => "lint_failed",
        }
    }
}

impl From<serde_json::Error> for BootlintError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BootlintError>;
