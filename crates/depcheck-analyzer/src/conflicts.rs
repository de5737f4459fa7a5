//! Version conflict detection: multiple distinct versions of one coordinate.

use std::collections::BTreeMap;
use std::fmt;

use depcheck_core::tree::{Artifact, DependencyTree, NodeIndex};
use depcheck_core::version::MavenVersion;

/// Report of coordinates appearing at more than one distinct version.
#[derive(Debug, Default)]
pub struct ConflictReport {
    /// `group:artifact` key to its conflicting nodes, ascending by version.
    /// Key iteration is lexicographic.
    pub conflicts: BTreeMap<String, Vec<Artifact>>,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of conflicting coordinates.
    pub fn len(&self) -> usize {
        self.conflicts.len()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflicts.is_empty() {
            return write!(f, "No version conflicts.");
        }
        writeln!(f, "Version conflicts ({}):", self.conflicts.len())?;
        for (key, nodes) in &self.conflicts {
            writeln!(f, "  {key}")?;
            for node in nodes {
                writeln!(f, "    {node}")?;
            }
        }
        Ok(())
    }
}

/// Group every node below the root by `group:artifact` and report the keys
/// carrying more than one distinct version.
///
/// Grouping is an ordered insert keyed by the parsed version: two nodes
/// whose versions compare equal (`1.0` vs `1.0.0`) coalesce and the first
/// occurrence is kept, even when the two occurrences root different
/// sub-trees. The root itself is never grouped.
pub fn find_version_conflicts(tree: &DependencyTree) -> ConflictReport {
    let mut groups: BTreeMap<String, BTreeMap<MavenVersion, Artifact>> = BTreeMap::new();
    collect(tree, tree.root(), &mut groups);

    let conflicts: BTreeMap<String, Vec<Artifact>> = groups
        .into_iter()
        .filter(|(_, versions)| versions.len() > 1)
        .map(|(key, versions)| (key, versions.into_values().collect()))
        .collect();

    tracing::debug!(conflicts = conflicts.len(), "version conflict scan complete");
    ConflictReport { conflicts }
}

fn collect(
    tree: &DependencyTree,
    idx: NodeIndex,
    groups: &mut BTreeMap<String, BTreeMap<MavenVersion, Artifact>>,
) {
    for child in tree.children_of(idx) {
        let artifact = tree.artifact(child);
        groups
            .entry(artifact.key())
            .or_default()
            .entry(artifact.parsed_version())
            .or_insert_with(|| artifact.clone());
        collect(tree, child, groups);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(group: &str, name: &str, version: &str) -> Artifact {
        Artifact::new(group, name, version)
    }

    #[test]
    fn single_version_keys_yield_empty_report() {
        let mut tree = DependencyTree::new(artifact("com.example", "app", "1.0"));
        let root = tree.root();
        let a = tree.add_child(root, artifact("org.a", "a", "1.0"));
        tree.add_child(a, artifact("org.b", "b", "2.0"));

        let report = find_version_conflicts(&tree);
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "No version conflicts.");
    }

    #[test]
    fn reports_coordinate_with_two_versions() {
        // root -> { A:1.0, B:1.0 -> { A:2.0 } }
        let mut tree = DependencyTree::new(artifact("com.example", "app", "1.0"));
        let root = tree.root();
        tree.add_child(root, artifact("org.lib", "a", "1.0"));
        let b = tree.add_child(root, artifact("org.lib", "b", "1.0"));
        tree.add_child(b, artifact("org.lib", "a", "2.0"));

        let report = find_version_conflicts(&tree);
        assert_eq!(report.len(), 1);

        let versions: Vec<&str> = report.conflicts["org.lib:a"]
            .iter()
            .map(|a| a.version.as_str())
            .collect();
        assert_eq!(versions, vec!["1.0", "2.0"]);
        assert!(!report.conflicts.contains_key("org.lib:b"));
    }

    #[test]
    fn identical_versions_coalesce() {
        // root -> { A:1.0, B:1.0 -> { A:1.0 } }
        let mut tree = DependencyTree::new(artifact("com.example", "app", "1.0"));
        let root = tree.root();
        tree.add_child(root, artifact("org.lib", "a", "1.0"));
        let b = tree.add_child(root, artifact("org.lib", "b", "1.0"));
        tree.add_child(b, artifact("org.lib", "a", "1.0"));

        assert!(find_version_conflicts(&tree).is_empty());
    }

    #[test]
    fn equal_comparing_versions_coalesce_first_kept() {
        // 1.0 and 1.0.0 compare equal; the first occurrence stays in the set,
        // so the coordinate never reaches two distinct versions.
        let mut tree = DependencyTree::new(artifact("com.example", "app", "1.0"));
        let root = tree.root();
        tree.add_child(root, artifact("org.lib", "a", "1.0"));
        let b = tree.add_child(root, artifact("org.lib", "b", "1.0"));
        tree.add_child(b, artifact("org.lib", "a", "1.0.0"));

        assert!(find_version_conflicts(&tree).is_empty());

        // With a genuinely distinct third version the kept entry is the
        // first-seen spelling.
        tree.add_child(root, artifact("org.lib", "a", "2.0"));
        let report = find_version_conflicts(&tree);
        let versions: Vec<&str> = report.conflicts["org.lib:a"]
            .iter()
            .map(|a| a.version.as_str())
            .collect();
        assert_eq!(versions, vec!["1.0", "2.0"]);
    }

    #[test]
    fn root_is_never_grouped() {
        // The root coordinate also appears as a dependency at another
        // version; only the dependency occurrence counts, so no conflict.
        let mut tree = DependencyTree::new(artifact("com.example", "app", "1.0"));
        let root = tree.root();
        tree.add_child(root, artifact("com.example", "app", "2.0"));

        assert!(find_version_conflicts(&tree).is_empty());
    }

    #[test]
    fn versions_ascend_structurally_within_a_key() {
        let mut tree = DependencyTree::new(artifact("com.example", "app", "1.0"));
        let root = tree.root();
        tree.add_child(root, artifact("org.lib", "a", "1.10"));
        let b = tree.add_child(root, artifact("org.lib", "b", "1.0"));
        tree.add_child(b, artifact("org.lib", "a", "1.2"));
        tree.add_child(b, artifact("org.lib", "a", "1.2-SNAPSHOT"));

        let report = find_version_conflicts(&tree);
        let versions: Vec<&str> = report.conflicts["org.lib:a"]
            .iter()
            .map(|a| a.version.as_str())
            .collect();
        // Structural ordering: 1.2-SNAPSHOT < 1.2 < 1.10
        assert_eq!(versions, vec!["1.2-SNAPSHOT", "1.2", "1.10"]);
    }

    #[test]
    fn keys_iterate_lexicographically() {
        let mut tree = DependencyTree::new(artifact("com.example", "app", "1.0"));
        let root = tree.root();
        tree.add_child(root, artifact("org.z", "z", "1.0"));
        tree.add_child(root, artifact("org.z", "z", "2.0"));
        tree.add_child(root, artifact("org.a", "a", "1.0"));
        tree.add_child(root, artifact("org.a", "a", "2.0"));

        let report = find_version_conflicts(&tree);
        let keys: Vec<&String> = report.conflicts.keys().collect();
        assert_eq!(keys, vec!["org.a:a", "org.z:z"]);
    }

    #[test]
    fn repeated_runs_yield_identical_output() {
        let mut tree = DependencyTree::new(artifact("com.example", "app", "1.0"));
        let root = tree.root();
        tree.add_child(root, artifact("org.lib", "a", "1.0"));
        tree.add_child(root, artifact("org.lib", "a", "2.0"));

        let first = find_version_conflicts(&tree).to_string();
        let second = find_version_conflicts(&tree).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn display_lists_key_then_nodes() {
        let mut tree = DependencyTree::new(artifact("com.example", "app", "1.0"));
        let root = tree.root();
        tree.add_child(root, artifact("org.lib", "a", "1.0"));
        tree.add_child(root, artifact("org.lib", "a", "2.0"));

        let rendered = find_version_conflicts(&tree).to_string();
        assert!(rendered.contains("Version conflicts (1):"));
        assert!(rendered.contains("  org.lib:a\n"));
        assert!(rendered.contains("    org.lib:a:1.0\n"));
        assert!(rendered.contains("    org.lib:a:2.0\n"));
    }
}
