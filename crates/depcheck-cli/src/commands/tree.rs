//! Handler for `depcheck tree`.

use std::path::Path;

use miette::Result;

use depcheck_ops::ops_tree;

pub fn exec(graph: &Path, verbose: bool) -> Result<()> {
    ops_tree::tree(graph, verbose)
}
