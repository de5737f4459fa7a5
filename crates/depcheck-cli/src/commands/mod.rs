//! Command dispatch and handler modules.

mod snapshot;
mod tree;
mod versions;

use miette::Result;

use depcheck_core::config::{CheckOptions, ProjectConfig, WarnLevel};
use depcheck_util::errors::DepcheckError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Snapshot {
            graph,
            warn_level,
            skip,
            print_tree,
        } => snapshot::exec(&graph, warn_level.as_deref(), skip, print_tree, cli.verbose),
        Command::Versions {
            graph,
            warn_level,
            skip,
            print_tree,
        } => versions::exec(&graph, warn_level.as_deref(), skip, print_tree, cli.verbose),
        Command::Tree { graph } => tree::exec(&graph, cli.verbose),
    }
}

/// Merge `[check]` defaults from depcheck.toml in the current directory with
/// command-line overrides.
fn resolve_options(
    warn_level: Option<&str>,
    skip: bool,
    print_tree: bool,
) -> Result<CheckOptions> {
    let cwd = std::env::current_dir().map_err(DepcheckError::Io)?;
    let config = ProjectConfig::load(&cwd)?;

    let warn_level = match warn_level {
        Some(s) => Some(WarnLevel::parse(s).ok_or_else(|| DepcheckError::Generic {
            message: format!("Unknown warn level '{s}' (expected 'warn' or 'error')"),
        })?),
        None => None,
    };

    Ok(config.options(skip, warn_level, print_tree))
}
