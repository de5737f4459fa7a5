//! Snapshot dependency detection.

use std::cmp::Ordering;
use std::fmt;

use depcheck_core::tree::{Artifact, DependencyTree};

/// Report of all `-SNAPSHOT` dependencies found below the root.
#[derive(Debug, Default)]
pub struct SnapshotReport {
    /// Qualifying artifacts, ordered by full coordinate string, one entry
    /// per distinct coordinate string.
    pub findings: Vec<Artifact>,
}

impl SnapshotReport {
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }
}

impl fmt::Display for SnapshotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.findings.is_empty() {
            return write!(f, "No snapshot dependencies.");
        }
        writeln!(f, "Snapshot dependencies ({}):", self.findings.len())?;
        for artifact in &self.findings {
            writeln!(f, "  {artifact}")?;
        }
        Ok(())
    }
}

/// Listing order: the full coordinate string. A strict total order, so the
/// report is stable across runs.
pub fn display_order(a: &Artifact, b: &Artifact) -> Ordering {
    a.to_string().cmp(&b.to_string())
}

/// Collect every snapshot dependency in the tree.
///
/// The root is the project under analysis and is never reported, even when
/// its own version carries the snapshot marker. Traversal descends into
/// every child regardless of whether the current node matched: a stable
/// node may still have unstable descendants.
pub fn find_snapshots(tree: &DependencyTree) -> SnapshotReport {
    let mut found: Vec<Artifact> = Vec::new();
    let mut stack = vec![tree.root()];

    while let Some(idx) = stack.pop() {
        let artifact = tree.artifact(idx);
        if tree.parent_of(idx).is_some() && artifact.is_snapshot() {
            found.push(artifact.clone());
        }
        stack.extend(tree.children_of(idx));
    }

    found.sort_by(display_order);
    found.dedup_by(|a, b| display_order(a, b) == Ordering::Equal);

    tracing::debug!(findings = found.len(), "snapshot scan complete");
    SnapshotReport { findings: found }
}
