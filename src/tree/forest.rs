//! Arena-backed forest of asset nodes.
//!
//! Nodes are owned by the forest's slot vector. Children and parents refer to each
//! other through `NodeId`s, so a directory and its children never own each other and
//! a parent link can only ever resolve to a node of the same forest.

use crate::tree::node::{DirectoryNode, FileNode, ModelNode};
use crate::tree::remote::RemoteNode;
use crate::types::NodeId;

/// Ordered sequence of root trees
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    slots: Vec<Option<FileNode>>,
    roots: Vec<NodeId>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a forest from a backend listing, linking every child to its parent
    pub fn from_remote(nodes: Vec<RemoteNode>) -> Self {
        let mut forest = Self::new();
        for node in nodes {
            let id = forest.ingest(node, None);
            forest.roots.push(id);
        }
        forest
    }

    fn ingest(&mut self, node: RemoteNode, parent: Option<NodeId>) -> NodeId {
        match node {
            RemoteNode::Directory {
                path,
                name,
                children,
                custom_texture_path,
            } => {
                let id = self.alloc(FileNode::Directory(DirectoryNode {
                    path,
                    name,
                    children: Vec::with_capacity(children.len()),
                    custom_texture_path,
                    parent,
                }));
                for child in children {
                    let child_id = self.ingest(child, Some(id));
                    if let Some(FileNode::Directory(dir)) = self.get_mut(id) {
                        dir.children.push(child_id);
                    }
                }
                id
            }
            RemoteNode::Model {
                path,
                name,
                texture_path,
                custom_texture_path,
            } => self.alloc(FileNode::Model(ModelNode {
                path,
                name,
                texture_path,
                custom_texture_path,
                parent,
            })),
        }
    }

    fn alloc(&mut self, node: FileNode) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Some(node));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&FileNode> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut FileNode> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Append a parentless model as a new root
    pub fn push_root_model(&mut self, model: ModelNode) -> NodeId {
        let id = self.alloc(FileNode::Model(ModelNode {
            parent: None,
            ..model
        }));
        self.roots.push(id);
        id
    }

    /// Detach a node from its parent (or the root sequence) and drop its subtree
    ///
    /// Returns the removed node itself, or `None` if the id was not live.
    pub fn remove(&mut self, id: NodeId) -> Option<FileNode> {
        let parent = self.get(id)?.parent();
        match parent {
            Some(parent_id) => {
                if let Some(FileNode::Directory(dir)) = self.get_mut(parent_id) {
                    dir.children.retain(|child| *child != id);
                }
            }
            None => self.roots.retain(|root| *root != id),
        }

        let mut pending: Vec<NodeId> = self.get(id)?.children().to_vec();
        while let Some(next) = pending.pop() {
            if let Some(node) = self.slots.get_mut(next.0).and_then(Option::take) {
                pending.extend_from_slice(node.children());
            }
        }
        self.slots.get_mut(id.0).and_then(Option::take)
    }

    /// Pre-order traversal of every live node, roots and children in order
    pub fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.slots.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get(id) {
                order.push(id);
                stack.extend(node.children().iter().rev().copied());
            }
        }
        order
    }

    /// Linear search by path; callers with an index should prefer it
    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|id| self.get(*id).map(|node| node.path() == path).unwrap_or(false))
    }
}
