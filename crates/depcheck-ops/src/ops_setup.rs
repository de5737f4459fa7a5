//! Shared setup for check operations: loading the dependency graph.

use std::path::Path;

use depcheck_core::source;
use depcheck_core::tree::DependencyTree;

/// Load the resolved dependency tree from the host tool's graph file.
///
/// A read or parse failure is fatal: the graph comes from the upstream
/// resolver, so there is nothing to analyze without it.
pub fn load_tree(graph_path: &Path, verbose: bool) -> miette::Result<DependencyTree> {
    tracing::debug!(path = %graph_path.display(), "loading dependency graph");

    let sp = depcheck_util::progress::spinner("Loading dependency graph...");
    let result = source::from_path(graph_path);
    sp.finish_and_clear();

    let tree = result?;
    if verbose {
        depcheck_util::progress::status_info(
            "Loaded",
            &format!("{} nodes from {}", tree.node_count(), graph_path.display()),
        );
    }
    Ok(tree)
}
