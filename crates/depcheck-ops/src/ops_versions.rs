//! Operation: check the dependency tree for conflicting versions.
//!
//! Hosts whose resolver already enforces a single version per coordinate
//! may never need this; it runs only when invoked.

use std::path::Path;

use depcheck_analyzer::conflicts;
use depcheck_core::config::{CheckOptions, WarnLevel};
use depcheck_util::errors::DepcheckError;
use depcheck_util::progress;

use crate::ops_setup;
use crate::RULE;

/// Scan for version conflicts and apply the configured severity.
pub fn versions(graph_path: &Path, opts: &CheckOptions, verbose: bool) -> miette::Result<()> {
    let tree = ops_setup::load_tree(graph_path, verbose)?;

    if opts.print_tree {
        print!("{}", tree.render());
    }

    if opts.skip {
        progress::status_warn("Skipped", "version conflict check");
        return Ok(());
    }

    progress::status(
        "Checking",
        &format!("{} for version conflicts", tree.artifact(tree.root())),
    );

    let report = conflicts::find_version_conflicts(&tree);
    if report.is_empty() {
        progress::status("Finished", "no conflicting dependency versions found");
        return Ok(());
    }

    progress::status_warn(
        "Found",
        &format!("{} coordinates with conflicting versions:", report.len()),
    );
    println!();
    println!("{RULE}");
    for (key, nodes) in &report.conflicts {
        println!("--> {key}");
        for node in nodes {
            println!("----> {node}");
        }
    }
    println!("{RULE}");

    match opts.warn_level {
        WarnLevel::Error => Err(DepcheckError::Policy {
            message: format!(
                "{} dependency coordinates resolved at multiple versions",
                report.len()
            ),
        }
        .into()),
        WarnLevel::Warn => Ok(()),
    }
}
