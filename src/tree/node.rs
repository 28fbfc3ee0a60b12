//! Asset node types

use crate::types::{NodeId, NodeKind};

/// Directory node: a folder of assets
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryNode {
    pub path: String,
    pub name: String,
    pub children: Vec<NodeId>, // backend order, never re-sorted
    pub custom_texture_path: Option<String>,
    pub parent: Option<NodeId>,
}

/// Model node: a single 3D asset
#[derive(Debug, Clone, PartialEq)]
pub struct ModelNode {
    pub path: String,
    pub name: String,
    /// Explicit, already-resolved texture (set by the backend for map members)
    pub texture_path: Option<String>,
    /// User-set override at this node
    pub custom_texture_path: Option<String>,
    pub parent: Option<NodeId>,
}

/// Asset tree node
#[derive(Debug, Clone, PartialEq)]
pub enum FileNode {
    Directory(DirectoryNode),
    Model(ModelNode),
}

impl FileNode {
    pub fn path(&self) -> &str {
        match self {
            FileNode::Directory(dir) => &dir.path,
            FileNode::Model(model) => &model.path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FileNode::Directory(dir) => &dir.name,
            FileNode::Model(model) => &model.name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            FileNode::Directory(_) => NodeKind::Directory,
            FileNode::Model(_) => NodeKind::Model,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        match self {
            FileNode::Directory(dir) => dir.parent,
            FileNode::Model(model) => model.parent,
        }
    }

    pub fn custom_texture_path(&self) -> Option<&str> {
        match self {
            FileNode::Directory(dir) => dir.custom_texture_path.as_deref(),
            FileNode::Model(model) => model.custom_texture_path.as_deref(),
        }
    }

    pub fn set_custom_texture_path(&mut self, texture_path: Option<String>) {
        match self {
            FileNode::Directory(dir) => dir.custom_texture_path = texture_path,
            FileNode::Model(model) => model.custom_texture_path = texture_path,
        }
    }

    /// Children in backend order; models have none
    pub fn children(&self) -> &[NodeId] {
        match self {
            FileNode::Directory(dir) => &dir.children,
            FileNode::Model(_) => &[],
        }
    }

    pub fn as_model(&self) -> Option<&ModelNode> {
        match self {
            FileNode::Model(model) => Some(model),
            FileNode::Directory(_) => None,
        }
    }

    pub fn as_model_mut(&mut self) -> Option<&mut ModelNode> {
        match self {
            FileNode::Model(model) => Some(model),
            FileNode::Directory(_) => None,
        }
    }
}
