//! CLI argument definitions for depcheck.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depcheck",
    version,
    about = "Dependency hygiene checks for resolved Maven dependency trees",
    long_about = "depcheck inspects the dependency tree resolved by the host build tool \
                  (e.g. `mvn dependency:tree -DoutputType=json`) and flags SNAPSHOT \
                  versions and conflicting dependency versions, with a configurable \
                  warn/error policy."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check for SNAPSHOT versions among dependencies
    Snapshot {
        /// Path to the JSON dependency graph
        #[arg(default_value = "dependency-graph.json")]
        graph: PathBuf,
        /// Severity when findings exist: warn, error
        #[arg(long)]
        warn_level: Option<String>,
        /// Skip the check entirely
        #[arg(long)]
        skip: bool,
        /// Print the dependency tree before analysis
        #[arg(long)]
        print_tree: bool,
    },

    /// Check for multiple versions of the same group:artifact
    Versions {
        /// Path to the JSON dependency graph
        #[arg(default_value = "dependency-graph.json")]
        graph: PathBuf,
        /// Severity when findings exist: warn, error
        #[arg(long)]
        warn_level: Option<String>,
        /// Skip the check entirely
        #[arg(long)]
        skip: bool,
        /// Print the dependency tree before analysis
        #[arg(long)]
        print_tree: bool,
    },

    /// Print the dependency tree
    Tree {
        /// Path to the JSON dependency graph
        #[arg(default_value = "dependency-graph.json")]
        graph: PathBuf,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
