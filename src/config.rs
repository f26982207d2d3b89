use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BootlintError, Result};
use crate::lint::LintConfig;

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".bootlint.toml";

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lint: LintSection,
    #[serde(default)]
    pub output: OutputSection,
}

impl Config {
    /// Load defaults, then config files, then `BOOTLINT_*` environment overrides.
    ///
    /// An explicit path (or `BOOTLINT_CONFIG`) replaces the global and project
    /// files rather than layering on top of them.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("BOOTLINT_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                BootlintError::Config(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("bootlint/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            BootlintError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            BootlintError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.lint {
            self.lint.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(values) = lookup("BOOTLINT_DISABLE").map(|raw| split_list(&raw)) {
            self.lint.disabled_rules.extend(values);
        }
        if let Some(value) = lookup("BOOTLINT_PARALLEL") {
            self.lint.parallel = parse_bool(&value);
        }
        if let Some(value) = lookup("BOOTLINT_FORMAT") {
            self.output.format = parse_format(&value)?;
        }
        Ok(())
    }

    /// Engine settings derived from the `[lint]` section.
    #[must_use]
    pub fn lint_config(&self) -> LintConfig {
        LintConfig {
            disabled_rules: self.lint.disabled_rules.clone(),
            parallel: self.lint.parallel,
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LintSection {
    #[serde(default)]
    pub disabled_rules: BTreeSet<String>,
    #[serde(default)]
    pub parallel: bool,
}

impl LintSection {
    fn merge(&mut self, patch: LintPatch) {
        if let Some(values) = patch.disabled_rules {
            self.disabled_rules.extend(values);
        }
        if let Some(value) = patch.parallel {
            self.parallel = value;
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
        }
    }
}

impl OutputSection {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    lint: Option<LintPatch>,
    output: Option<OutputPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct LintPatch {
    disabled_rules: Option<Vec<String>>,
    parallel: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputPatch {
    format: Option<String>,
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_format(value: &str) -> Result<String> {
    match value.to_lowercase().as_str() {
        format @ ("human" | "json") => Ok(format.to_string()),
        _ => Err(BootlintError::Config(format!(
            "invalid BOOTLINT_FORMAT value {value} (expected human|json)"
        ))),
    }
}
