//! bootlint - lint HTML files, directories or stdin
//!
//! Runs the rule registry over each input and reports findings either as
//! human-readable `bootlint:` lines or as a JSON report.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output::{Envelope, TextReport, emit_json};
use crate::error::{BootlintError, Result};
use crate::lint::diagnostic::RuleCategory;
use crate::lint::rules::all_rules;
use crate::lint::{Diagnostic, LintEngine};

/// Label used for markup read from standard input.
pub const STDIN_LABEL: &str = "<stdin>";

#[derive(Args, Debug, Default)]
pub struct LintArgs {
    /// HTML files or directories to lint (`-` or nothing reads stdin)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Skip specific rules (comma-separated IDs)
    #[arg(long, value_delimiter = ',')]
    pub disable: Vec<String>,

    /// Evaluate rules in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Show detailed rule documentation
    #[arg(long, conflicts_with = "list_rules")]
    pub explain: Option<String>,

    /// List all available rules
    #[arg(long)]
    pub list_rules: bool,
}

pub fn run(ctx: &AppContext, args: &LintArgs) -> Result<()> {
    if let Some(rule_id) = &args.explain {
        return explain_rule(ctx, rule_id);
    }

    let engine = LintEngine::with_all_rules(ctx.lint_config(&args.disable, args.parallel));

    if args.list_rules {
        return list_rules(ctx, &engine);
    }

    let inputs = collect_inputs(&args.paths)?;
    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        let (label, markup) = match &input {
            Input::Stdin => {
                let mut markup = String::new();
                std::io::stdin().read_to_string(&mut markup)?;
                (STDIN_LABEL.to_string(), markup)
            }
            Input::File(path) => (path.display().to_string(), std::fs::read_to_string(path)?),
        };

        debug!(path = %label, bytes = markup.len(), "linting");
        let diagnostics = engine.lint_markup(&markup)?;
        results.push(LintFileResult {
            path: label,
            diagnostics,
        });
    }

    let total: usize = results.iter().map(|r| r.diagnostics.len()).sum();
    match ctx.output_format {
        OutputFormat::Human => output_human(&results, total),
        OutputFormat::Json => emit_json(&Envelope::report(
            JsonReport::from_results(&results),
            total,
        ))?,
    }

    if total > 0 {
        Err(BootlintError::LintFailed(format!(
            "{total} diagnostic(s) found"
        )))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Input {
    Stdin,
    File(PathBuf),
}

fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<Input>> {
    if paths.is_empty() {
        return Ok(vec![Input::Stdin]);
    }

    let mut inputs = Vec::new();
    for path in paths {
        if path.as_os_str() == "-" {
            inputs.push(Input::Stdin);
        } else if path.is_dir() {
            let found = discover_html(path)?;
            if found.is_empty() {
                return Err(BootlintError::NotFound(format!(
                    "no HTML files under {}",
                    path.display()
                )));
            }
            inputs.extend(found.into_iter().map(Input::File));
        } else if path.is_file() {
            inputs.push(Input::File(path.clone()));
        } else {
            return Err(BootlintError::NotFound(format!(
                "path {} does not exist",
                path.display()
            )));
        }
    }
    Ok(inputs)
}

fn discover_html(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            BootlintError::Io(err.into_io_error().unwrap_or_else(|| {
                std::io::Error::other(format!("walk {}", root.display()))
            }))
        })?;
        if entry.file_type().is_file() && is_html(entry.path()) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

struct LintFileResult {
    path: String,
    diagnostics: Vec<Diagnostic>,
}

fn explain_rule(ctx: &AppContext, rule_id: &str) -> Result<()> {
    let rules = all_rules();
    let rule = rules
        .iter()
        .find(|r| r.id() == rule_id)
        .ok_or_else(|| BootlintError::NotFound(format!("Rule '{rule_id}' not found")))?;

    if ctx.output_format == OutputFormat::Json {
        let info = RuleSummary {
            id: rule.id(),
            description: rule.description(),
            category: rule.category(),
        };
        emit_json(&Envelope::ok(info))?;
    } else {
        let mut report = TextReport::new();
        report
            .heading(&format!("Rule: {}", rule.id()))
            .field("Category", &rule.category().to_string())
            .gap()
            .heading("Description")
            .text(rule.description())
            .print();
    }

    Ok(())
}

fn list_rules(ctx: &AppContext, engine: &LintEngine) -> Result<()> {
    let rules = engine.list_rules();

    if ctx.output_format == OutputFormat::Json {
        return emit_json(&Envelope::ok(rules));
    }

    let mut report = TextReport::new();
    for category in RuleCategory::ALL {
        let in_category: Vec<_> = rules.iter().filter(|r| r.category == category).collect();
        if in_category.is_empty() {
            continue;
        }

        report.heading(&category.to_string());
        for rule in in_category {
            let badge = if rule.disabled { " [disabled]" } else { "" };
            report.item(&format!("{} - {}{badge}", rule.id, rule.description));
        }
        report.gap();
    }

    report.print();
    Ok(())
}

fn output_human(results: &[LintFileResult], total: usize) {
    let mut report = TextReport::new();
    for file_result in results {
        report.document(&file_result.path, &file_result.diagnostics);
    }
    report
        .heading("Summary")
        .field("Files", &results.len().to_string())
        .field("Diagnostics", &total.to_string())
        .print();
}

#[derive(Serialize)]
struct RuleSummary<'a> {
    id: &'a str,
    description: &'a str,
    category: RuleCategory,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    files: Vec<JsonFileReport<'a>>,
    summary: JsonSummary,
}

#[derive(Debug, Serialize)]
struct JsonFileReport<'a> {
    path: &'a str,
    diagnostics: &'a [Diagnostic],
}

#[derive(Debug, Serialize)]
struct JsonSummary {
    total_files: usize,
    total_diagnostics: usize,
    passed: bool,
}

impl<'a> JsonReport<'a> {
    fn from_results(results: &'a [LintFileResult]) -> Self {
        let total_diagnostics = results.iter().map(|r| r.diagnostics.len()).sum();
        Self {
            files: results
                .iter()
                .map(|r| JsonFileReport {
                    path: &r.path,
                    diagnostics: &r.diagnostics,
                })
                .collect(),
            summary: JsonSummary {
                total_files: results.len(),
                total_diagnostics,
                passed: total_diagnostics == 0,
            },
        }
    }
}
