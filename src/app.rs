use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::{BootlintError, Result};
use crate::lint::LintConfig;

pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        Self::new(cli, config)
    }

    /// Resolve the output format: `--robot`, then `--format`, then config.
    pub fn new(cli: &Cli, config: Config) -> Result<Self> {
        let output_format = match cli.output_format() {
            Some(format) => format,
            None => OutputFormat::from_config(&config.output.format).ok_or_else(|| {
                BootlintError::Config(format!(
                    "invalid output format {} (expected human|json)",
                    config.output.format
                ))
            })?,
        };

        Ok(Self {
            config,
            output_format,
        })
    }

    /// Engine settings: config file values with command-line flags on top.
    #[must_use]
    pub fn lint_config(&self, disable: &[String], parallel: bool) -> LintConfig {
        let mut config = self.config.lint_config();
        for rule_id in disable {
            config = config.disable_rule(rule_id.clone());
        }
        if parallel {
            config.parallel = true;
        }
        config
    }
}
