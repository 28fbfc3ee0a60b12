//! Core types shared across the asset index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// NodePath: unique key of a node across the catalog and selection forests
pub type NodePath = String;

/// NodeId: slot of a node inside its owning forest
///
/// Only meaningful together with the forest it came from. Ids are never reused
/// within a forest, so a stale id resolves to nothing rather than to another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Which of the two engine-owned forests a node lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForestKind {
    /// Everything discovered under the active directory
    Catalog,
    /// Members of the currently selected map
    Selection,
}

/// Node variant discriminant, used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    Model,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Directory => write!(f, "directory"),
            NodeKind::Model => write!(f, "model"),
        }
    }
}

/// Result of a single-flight load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The forest was replaced and the index rebuilt
    Loaded { nodes: usize },
    /// Another load of the same forest was already in flight; nothing happened
    Skipped,
}

/// Result of adding a model to the selected map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new member node was appended to the selection forest
    Added(NodePath),
    /// The resulting path already existed; its texture was updated in place
    Merged(NodePath),
}

impl AddOutcome {
    pub fn path(&self) -> &str {
        match self {
            AddOutcome::Added(path) | AddOutcome::Merged(path) => path,
        }
    }
}
