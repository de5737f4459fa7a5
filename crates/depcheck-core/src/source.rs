//! Ingestion of the host build tool's dependency graph output.
//!
//! The graph is produced upstream, e.g. with
//! `mvn dependency:tree -DoutputType=json -DoutputFile=dependency-graph.json`:
//! nested objects carrying `groupId`, `artifactId`, `version`, an optional
//! `scope`, and `children`. Reading it here is boundary plumbing only; no
//! resolution happens on this side.

use std::path::Path;

use serde::Deserialize;

use depcheck_util::errors::DepcheckError;

use crate::tree::{Artifact, DependencyTree, NodeIndex};

/// One node of the JSON dependency tree.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub children: Vec<GraphNode>,
}

/// Read and parse a dependency graph file.
pub fn from_path(path: &Path) -> miette::Result<DependencyTree> {
    let content = std::fs::read_to_string(path).map_err(|e| DepcheckError::Graph {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    from_json_str(&content)
}

/// Parse a dependency graph from its JSON text.
pub fn from_json_str(json: &str) -> miette::Result<DependencyTree> {
    let root: GraphNode = serde_json::from_str(json).map_err(|e| DepcheckError::Graph {
        message: format!("Failed to parse dependency graph: {e}"),
    })?;

    let mut tree = DependencyTree::new(to_artifact(&root));
    let root_idx = tree.root();
    for child in &root.children {
        insert(&mut tree, root_idx, child);
    }

    tracing::debug!(nodes = tree.node_count(), "dependency graph loaded");
    Ok(tree)
}

fn insert(tree: &mut DependencyTree, parent: NodeIndex, node: &GraphNode) {
    let idx = tree.add_child(parent, to_artifact(node));
    for child in &node.children {
        insert(tree, idx, child);
    }
}

fn to_artifact(node: &GraphNode) -> Artifact {
    Artifact {
        group: node.group_id.clone(),
        artifact: node.artifact_id.clone(),
        version: node.version.clone(),
        scope: node.scope.clone(),
    }
}
