//! Operation: display the resolved dependency tree.

use std::path::Path;

use crate::ops_setup;

/// Print the dependency tree for the loaded graph.
pub fn tree(graph_path: &Path, verbose: bool) -> miette::Result<()> {
    let tree = ops_setup::load_tree(graph_path, verbose)?;
    print!("{}", tree.render());
    Ok(())
}
