//! CLI command implementations
//!
//! Each command has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

pub mod lint;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::error::Result;

/// Dispatch the parsed command line to its handler
pub fn run(ctx: &AppContext, cli: &Cli) -> Result<()> {
    lint::run(ctx, &cli.lint)
}
