//! Operation: check the dependency tree for `-SNAPSHOT` versions.

use std::path::Path;

use depcheck_analyzer::snapshot;
use depcheck_core::config::{CheckOptions, WarnLevel};
use depcheck_util::errors::DepcheckError;
use depcheck_util::progress;

use crate::ops_setup;
use crate::RULE;

/// Scan for snapshot dependencies and apply the configured severity.
pub fn snapshot(graph_path: &Path, opts: &CheckOptions, verbose: bool) -> miette::Result<()> {
    let tree = ops_setup::load_tree(graph_path, verbose)?;

    if opts.print_tree {
        print!("{}", tree.render());
    }

    if opts.skip {
        progress::status_warn("Skipped", "snapshot dependency check");
        return Ok(());
    }

    progress::status(
        "Checking",
        &format!("{} for snapshot dependencies", tree.artifact(tree.root())),
    );

    let report = snapshot::find_snapshots(&tree);
    if report.is_empty() {
        progress::status("Finished", "no snapshot dependency found");
        return Ok(());
    }

    progress::status_warn("Found", &format!("{} snapshot dependencies:", report.len()));
    println!();
    println!("{RULE}");
    for finding in &report.findings {
        println!("--> {finding}");
    }
    println!("{RULE}");

    match opts.warn_level {
        WarnLevel::Error => Err(DepcheckError::Policy {
            message: format!("{} snapshot dependencies found", report.len()),
        }
        .into()),
        WarnLevel::Warn => Ok(()),
    }
}
