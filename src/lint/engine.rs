//! Lint engine for running the rule registry against a document.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::document::Document;
use crate::error::Result;

use super::config::LintConfig;
use super::diagnostic::{Diagnostic, RuleCategory};
use super::rule::{BoxedRule, LintRule};
use super::rules::all_rules;

/// The lint engine that manages and runs rules
pub struct LintEngine {
    rules: Vec<BoxedRule>,
    config: LintConfig,
}

impl LintEngine {
    /// Create a new lint engine with the given config
    #[must_use]
    pub fn new(config: LintConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    /// Create a new engine with default config
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LintConfig::default())
    }

    /// Create an engine with every built-in rule registered, in registry order
    #[must_use]
    pub fn with_all_rules(config: LintConfig) -> Self {
        let mut engine = Self::new(config);
        for rule in all_rules() {
            engine.register(rule);
        }
        engine
    }

    /// Register a lint rule. Registration order is output order.
    pub fn register(&mut self, rule: BoxedRule) {
        self.rules.push(rule);
    }

    /// Register a lint rule (builder pattern)
    #[must_use]
    pub fn with_rule(mut self, rule: BoxedRule) -> Self {
        self.register(rule);
        self
    }

    /// Get registered rules
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Get the config
    #[must_use]
    pub const fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Set the config
    pub fn set_config(&mut self, config: LintConfig) {
        self.config = config;
    }

    fn active_rules(&self) -> Vec<&dyn LintRule> {
        self.rules
            .iter()
            .filter(|rule| !self.config.is_rule_disabled(rule.id()))
            .map(|rule| rule.as_ref())
            .collect()
    }

    /// Run every enabled rule once, in registration order, and concatenate
    /// their diagnostics. The first rule error aborts the pass.
    pub fn lint(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let rules = self.active_rules();
        let mut diagnostics = Vec::new();
        for rule in &rules {
            diagnostics.extend(run_rule(*rule, doc)?);
        }
        debug!(
            rules = rules.len(),
            diagnostics = diagnostics.len(),
            "lint pass complete"
        );
        Ok(diagnostics)
    }

    /// Parse `markup` and lint it.
    ///
    /// With [`LintConfig::parallel`] set, rules are spread over the rayon
    /// pool. The parsed tree cannot be shared across threads, so each worker
    /// parses its own copy; results are collected by rule index and come back
    /// in registration order, identical to a sequential pass.
    pub fn lint_markup(&self, markup: &str) -> Result<Vec<Diagnostic>> {
        if !self.config.parallel {
            return self.lint(&Document::parse(markup));
        }

        let rules = self.active_rules();
        let per_rule: Vec<Result<Vec<Diagnostic>>> = rules
            .par_iter()
            .map_init(
                || Document::parse(markup),
                |doc, rule| run_rule(*rule, doc),
            )
            .collect();

        let mut diagnostics = Vec::new();
        for result in per_rule {
            diagnostics.extend(result?);
        }
        debug!(
            rules = rules.len(),
            diagnostics = diagnostics.len(),
            parallel = true,
            "lint pass complete"
        );
        Ok(diagnostics)
    }

    /// List all registered rules
    #[must_use]
    pub fn list_rules(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id().to_string(),
                description: r.description().to_string(),
                category: r.category(),
                disabled: self.config.is_rule_disabled(r.id()),
            })
            .collect()
    }
}

fn run_rule(rule: &dyn LintRule, doc: &Document) -> Result<Vec<Diagnostic>> {
    let diagnostics = rule.check(doc)?;
    debug!(rule = rule.id(), found = diagnostics.len(), "rule checked");
    Ok(diagnostics)
}

/// Information about a registered rule
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    /// Rule ID
    pub id: String,
    /// Rule description
    pub description: String,
    /// Rule category
    pub category: RuleCategory,
    /// Whether the rule is disabled
    pub disabled: bool,
}
