//! Lint engine configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Configuration for a lint pass
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Rules to disable by ID
    #[serde(default)]
    pub disabled_rules: BTreeSet<String>,

    /// Evaluate rules on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

impl LintConfig {
    /// Create a new default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable parallel rule evaluation
    #[must_use]
    pub const fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Disable a rule
    #[must_use]
    pub fn disable_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.disabled_rules.insert(rule_id.into());
        self
    }

    /// Check if a rule is disabled
    #[must_use]
    pub fn is_rule_disabled(&self, rule_id: &str) -> bool {
        self.disabled_rules.contains(rule_id)
    }
}
