//! The resolved dependency tree: node model and diagnostic rendering.

use std::fmt;

use petgraph::graph::DiGraph;
use petgraph::Direction;

pub use petgraph::graph::NodeIndex;

use crate::version::{MavenVersion, SNAPSHOT_SUFFIX};

/// One resolved package in the dependency tree.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Artifact {
    pub group: String,
    pub artifact: String,
    pub version: String,
    /// Maven scope as reported by the host tool (absent on the root).
    pub scope: Option<String>,
}

impl Artifact {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            scope: None,
        }
    }

    /// `group:artifact` identifier (without version).
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    /// Whether the version carries the `-SNAPSHOT` marker.
    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with(SNAPSHOT_SUFFIX)
    }

    /// The version parsed for structural comparison.
    pub fn parsed_version(&self) -> MavenVersion {
        MavenVersion::parse(&self.version)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(ref scope) = self.scope {
            write!(f, ":{scope}")?;
        }
        Ok(())
    }
}

/// A resolved dependency tree backed by petgraph.
///
/// Built once per analysis run from the host tool's graph output, then
/// consumed read-only. Every node except the root has exactly one parent.
/// The shape is a tree — no shared children, no cycles — guaranteed by the
/// upstream resolver and not re-validated here.
///
/// Node identity is the [`NodeIndex`]: two nodes carrying the same
/// coordinate and version are distinct tree members.
#[derive(Debug)]
pub struct DependencyTree {
    graph: DiGraph<Artifact, ()>,
    root: NodeIndex,
}

impl DependencyTree {
    /// Create a tree holding only the root (the project under analysis).
    pub fn new(root: Artifact) -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(root);
        Self { graph, root }
    }

    /// Append a child under `parent`. Always creates a fresh node, so
    /// repeated coordinates stay distinct members.
    pub fn add_child(&mut self, parent: NodeIndex, artifact: Artifact) -> NodeIndex {
        let idx = self.graph.add_node(artifact);
        self.graph.add_edge(parent, idx, ());
        idx
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Payload of a node.
    pub fn artifact(&self, idx: NodeIndex) -> &Artifact {
        &self.graph[idx]
    }

    /// The owning node, absent only for the root. Used to distinguish the
    /// project itself from its dependencies, never for traversal.
    pub fn parent_of(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
    }

    /// Children of a node, in insertion order.
    pub fn children_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // petgraph iterates outgoing edges most-recent first
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        children.reverse();
        children
    }

    /// Total node count, root included.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Render the tree as indented text, one node per line, root first.
    ///
    /// Mid siblings are marked `├── `, last siblings `└── `, with `│   `
    /// continuation under open branches and blank continuation under closed
    /// ones. Pure function of the tree; deterministic, no I/O.
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", self.artifact(self.root)));
        let children = self.children_of(self.root);
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.render_subtree(&mut output, child, "", i == count - 1);
        }
        output
    }

    fn render_subtree(&self, output: &mut String, idx: NodeIndex, prefix: &str, is_last: bool) {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&format!("{prefix}{connector}{}\n", self.artifact(idx)));

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let children = self.children_of(idx);
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.render_subtree(output, child, &child_prefix, i == count - 1);
        }
    }
}
