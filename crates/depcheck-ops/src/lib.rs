//! High-level operations wiring CLI commands to the analyzer: the snapshot
//! check, the version conflict check, and tree display.

pub mod ops_setup;
pub mod ops_snapshot;
pub mod ops_tree;
pub mod ops_versions;

/// Horizontal rule framing findings listings.
pub(crate) const RULE: &str =
    "------------------------------------------------------------------------------";
