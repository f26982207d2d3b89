//! Diagnostic types for markup linting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of lint rule
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Document-level setup (doctype, meta tags, scripts)
    Document,
    /// Grid system (containers, rows, columns)
    Grid,
    /// Forms and input groups
    Forms,
    /// Other components (buttons, panels, modals, tooltips)
    Components,
}

impl RuleCategory {
    pub const ALL: [Self; 4] = [Self::Document, Self::Grid, Self::Forms, Self::Components];
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => write!(f, "document"),
            Self::Grid => write!(f, "grid"),
            Self::Forms => write!(f, "forms"),
            Self::Components => write!(f, "components"),
        }
    }
}

/// A single human-readable lint finding.
///
/// The message is the whole payload: it names the offending markup so the
/// author can find it without a source location.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostic {
    message: String,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&str> for Diagnostic {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Diagnostic {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display_is_message() {
        let diag = Diagnostic::new("Always set a `type` on `<button>`s.");
        assert_eq!(diag.to_string(), "Always set a `type` on `<button>`s.");
        assert_eq!(diag.message(), diag.clone().into_message());
    }

    #[test]
    fn test_diagnostic_serializes_as_plain_string() {
        let diag = Diagnostic::from("bad markup");
        assert_eq!(serde_json::to_string(&diag).unwrap(), "\"bad markup\"");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", RuleCategory::Grid), "grid");
        assert_eq!(format!("{}", RuleCategory::Components), "components");
    }
}
