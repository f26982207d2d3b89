//! Command-line surface for bootlint.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub mod commands;
pub mod output;

/// Output format for lint reports
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON inside the robot envelope
    Json,
}

impl OutputFormat {
    /// Parse the `[output] format` config value.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bootlint", version, about = "Lint HTML for Bootstrap markup mistakes")]
pub struct Cli {
    /// Machine-readable JSON output and JSON logs
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format (overrides the config file)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(long, short)]
    pub quiet: bool,

    /// Use this config file instead of the global and project ones
    #[arg(long, env = "BOOTLINT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub lint: commands::lint::LintArgs,
}

impl Cli {
    /// Format requested on the command line, if any. `--robot` implies JSON.
    #[must_use]
    pub fn output_format(&self) -> Option<OutputFormat> {
        if self.robot {
            Some(OutputFormat::Json)
        } else {
            self.format
        }
    }
}
