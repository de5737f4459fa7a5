//! Handler for `depcheck versions`.

use std::path::Path;

use miette::Result;

use depcheck_ops::ops_versions;

pub fn exec(
    graph: &Path,
    warn_level: Option<&str>,
    skip: bool,
    print_tree: bool,
    verbose: bool,
) -> Result<()> {
    let opts = super::resolve_options(warn_level, skip, print_tree)?;
    ops_versions::versions(graph, &opts, verbose)
}
