//! Markup linting framework.
//!
//! This module provides:
//!
//! - `LintRule` trait for implementing independent, stateless checks
//! - `LintEngine` for running an ordered rule registry against a document
//! - `Diagnostic` for reporting findings as plain text
//! - `LintConfig` for disabling rules and choosing parallel evaluation
//!
//! # Example
//!
//! ```
//! use bootlint::document::Document;
//! use bootlint::lint::{Diagnostic, LintEngine, LintRule, RuleCategory};
//!
//! // Define a custom rule
//! struct NoMarquee;
//!
//! impl LintRule for NoMarquee {
//!     fn id(&self) -> &str { "no-marquee" }
//!     fn description(&self) -> &str { "Flags <marquee>" }
//!     fn category(&self) -> RuleCategory { RuleCategory::Components }
//!     fn check(&self, doc: &Document) -> bootlint::Result<Vec<Diagnostic>> {
//!         Ok(if doc.exists("marquee")? {
//!             vec![Diagnostic::new("Found a <marquee>")]
//!         } else {
//!             vec![]
//!         })
//!     }
//! }
//!
//! let engine = LintEngine::with_defaults().with_rule(Box::new(NoMarquee));
//! let diagnostics = engine.lint(&Document::parse("<marquee>hi</marquee>")).unwrap();
//! assert_eq!(diagnostics.len(), 1);
//! ```

pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod rule;
pub mod rules;

pub use config::LintConfig;
pub use diagnostic::{Diagnostic, RuleCategory};
pub use engine::{LintEngine, RuleInfo};
pub use rule::{BoxedRule, LintRule};

pub use rules::all_rules;
