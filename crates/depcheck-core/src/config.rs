//! Tool configuration: severity policy and per-project defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use depcheck_util::errors::DepcheckError;

/// Severity applied when a check produces findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarnLevel {
    /// Report findings and let the run succeed.
    #[default]
    Warn,
    /// Report findings and fail the run.
    Error,
}

impl WarnLevel {
    /// Parse a user-supplied severity name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Effective options for one check invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Short-circuit before any detector runs; the run always succeeds.
    pub skip: bool,
    /// Whether non-empty findings fail the run.
    pub warn_level: WarnLevel,
    /// Print the dependency tree before analysis begins.
    pub print_tree: bool,
}

/// Per-project configuration loaded from `depcheck.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub check: CheckDefaults,
}

/// Defaults from `[check]` in depcheck.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckDefaults {
    #[serde(default)]
    pub skip: bool,
    #[serde(default, rename = "warn-level")]
    pub warn_level: WarnLevel,
    #[serde(default, rename = "print-tree")]
    pub print_tree: bool,
}

impl ProjectConfig {
    pub const FILE_NAME: &'static str = "depcheck.toml";

    /// Load from `<dir>/depcheck.toml`, or return defaults if the file
    /// doesn't exist.
    pub fn load(dir: &Path) -> miette::Result<Self> {
        let path = dir.join(Self::FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| DepcheckError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            DepcheckError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Effective options after applying command-line overrides. Flags win
    /// over file values; boolean flags can only enable, not disable.
    pub fn options(
        &self,
        skip: bool,
        warn_level: Option<WarnLevel>,
        print_tree: bool,
    ) -> CheckOptions {
        CheckOptions {
            skip: skip || self.check.skip,
            warn_level: warn_level.unwrap_or(self.check.warn_level),
            print_tree: print_tree || self.check.print_tree,
        }
    }
}
