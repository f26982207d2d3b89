//! bootlint - HTML linter for Bootstrap projects
//!
//! Checks a parsed document against the framework's markup conventions and
//! reports each violation as a plain-text diagnostic.

pub mod app;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod grid;
pub mod lint;

pub use error::{BootlintError, Result};
pub use lint::Diagnostic;

use document::Document;
use lint::{LintConfig, LintEngine};

/// Lint raw HTML with every built-in rule and default settings.
pub fn lint_html(markup: &str) -> Result<Vec<Diagnostic>> {
    LintEngine::with_all_rules(LintConfig::default()).lint(&Document::parse(markup))
}
