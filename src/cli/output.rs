//! Report rendering: the JSON envelope and the terminal report.

use chrono::{DateTime, Utc};
use console::style;
use serde::Serialize;

use crate::error::{BootlintError, Result};
use crate::lint::Diagnostic;

/// Printed once above the findings of a dirty document.
pub const FOUND_ERRORS_NOTICE: &str =
    "bootlint found errors in this document! See below for details.";

/// JSON wrapper around every machine-readable payload.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Nothing to report, or a listing that cannot fail.
    Ok,
    /// The lint pass finished and found problems.
    Findings { total: usize },
    Error { code: String, message: String },
}

impl<T: Serialize> Envelope<T> {
    fn new(status: Status, data: Option<T>) -> Self {
        Self {
            status,
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            data,
        }
    }

    /// Informational payload such as the rule listing.
    pub fn ok(data: T) -> Self {
        Self::new(Status::Ok, Some(data))
    }

    /// A lint report; the status reflects whether anything was found.
    pub fn report(data: T, total_diagnostics: usize) -> Self {
        let status = if total_diagnostics == 0 {
            Status::Ok
        } else {
            Status::Findings {
                total: total_diagnostics,
            }
        };
        Self::new(status, Some(data))
    }
}

impl Envelope<()> {
    pub fn error(err: &BootlintError) -> Self {
        Self::new(
            Status::Error {
                code: err.code().to_string(),
                message: err.to_string(),
            },
            None,
        )
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| BootlintError::Serialization(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

/// Terminal report assembled line by line and printed in one go.
#[derive(Default)]
pub struct TextReport {
    lines: Vec<String>,
}

impl TextReport {
    const KEY_WIDTH: usize = 14;

    pub fn new() -> Self {
        Self::default()
    }

    /// Bold heading underlined with dashes.
    pub fn heading(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn field(&mut self, key: &str, value: &str) -> &mut Self {
        let key = style(key).dim().to_string();
        self.lines
            .push(format!("{key:width$} {value}", width = Self::KEY_WIDTH));
        self
    }

    pub fn item(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn text(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn gap(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// One linted document: a ✓ line when clean, otherwise a ✗ line, the
    /// notice, and a `bootlint:` line per diagnostic in report order.
    pub fn document(&mut self, path: &str, diagnostics: &[Diagnostic]) -> &mut Self {
        if diagnostics.is_empty() {
            self.lines
                .push(format!("{} {}", style("✓").green(), style(path).dim()));
            return self;
        }

        self.lines
            .push(format!("{} {}", style("✗").red(), style(path).bold()));
        self.lines
            .push(format!("  {}", style(FOUND_ERRORS_NOTICE).yellow()));
        for diag in diagnostics {
            self.lines
                .push(format!("  {} {diag}", style("bootlint:").red().bold()));
        }
        self.gap()
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_status_tracks_findings() {
        let clean = serde_json::to_value(Envelope::report(vec!["a.html"], 0)).unwrap();
        assert_eq!(clean["status"], "ok");
        assert_eq!(clean["data"][0], "a.html");
        assert_eq!(clean["version"], env!("CARGO_PKG_VERSION"));

        let dirty = serde_json::to_value(Envelope::report(vec!["b.html"], 3)).unwrap();
        assert_eq!(dirty["status"]["findings"]["total"], 3);
    }

    #[test]
    fn test_error_envelope_has_no_data() {
        let err = BootlintError::NotFound("missing".to_string());
        let value = serde_json::to_value(Envelope::error(&err)).unwrap();
        assert_eq!(value["status"]["error"]["code"], "not_found");
        assert_eq!(value["status"]["error"]["message"], "not found: missing");
        assert!(value.get("data").is_none());
        assert!(value.get("warnings").is_none());
    }

    #[test]
    fn test_document_lines() {
        console::set_colors_enabled(false);
        let mut report = TextReport::new();
        report
            .document("clean.html", &[])
            .document("dirty.html", &[Diagnostic::new("first"), Diagnostic::new("second")]);
        assert_eq!(
            report.render(),
            format!(
                "✓ clean.html\n✗ dirty.html\n  {FOUND_ERRORS_NOTICE}\n  bootlint: first\n  bootlint: second\n"
            )
        );
    }

    #[test]
    fn test_heading_and_items() {
        console::set_colors_enabled(false);
        let mut report = TextReport::new();
        report.heading("Summary").item("one").gap().text("end");
        assert_eq!(report.render(), "Summary\n-------\n- one\n\nend");
    }
}
