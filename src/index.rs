//! Path Index
//!
//! Provides O(1) lookup from a node path to its location in either forest.
//! The index is derived data: it is always rebuilt from the two forests and never
//! treated as the source of truth.

use crate::tree::Forest;
use crate::types::{ForestKind, NodeId, NodePath};
use std::collections::HashMap;
use tracing::warn;

/// Location of an indexed node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef {
    pub forest: ForestKind,
    pub id: NodeId,
}

/// Index: path -> NodeRef
#[derive(Debug, Default)]
pub struct PathIndex {
    pub(crate) entries: HashMap<NodePath, NodeRef>,
}

impl PathIndex {
    pub fn new() -> Self {
        PathIndex {
            entries: HashMap::new(),
        }
    }

    /// Build an index over `catalog ∪ selection`
    pub fn build(catalog: &Forest, selection: &Forest) -> Self {
        let mut index = Self::new();
        index.rebuild(catalog, selection);
        index
    }

    /// Replace every entry with a fresh traversal of both forests
    ///
    /// Paths must be unique across the two forests. If the backend hands out a
    /// duplicate anyway, the first node seen (catalog before selection) keeps the key.
    pub fn rebuild(&mut self, catalog: &Forest, selection: &Forest) {
        self.entries.clear();
        for (kind, forest) in [
            (ForestKind::Catalog, catalog),
            (ForestKind::Selection, selection),
        ] {
            for id in forest.walk() {
                let Some(node) = forest.get(id) else {
                    continue;
                };
                if self.entries.contains_key(node.path()) {
                    warn!(path = node.path(), forest = ?kind, "Duplicate node path, keeping first");
                    continue;
                }
                self.entries
                    .insert(node.path().to_string(), NodeRef { forest: kind, id });
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<NodeRef> {
        self.entries.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All indexed paths, unordered
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
