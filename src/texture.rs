//! Effective texture resolution.
//!
//! A model's explicit `texture_path` wins unconditionally. Otherwise the nearest
//! `custom_texture_path` on the node itself or one of its ancestors applies.

use crate::tree::{FileNode, Forest};
use crate::types::NodeId;

/// Resolve the texture that should be applied when rendering `id`
///
/// Terminates because parent links are set once at forest construction and always
/// point towards a root.
pub fn effective_texture(forest: &Forest, id: NodeId) -> Option<&str> {
    let node = forest.get(id)?;
    if let FileNode::Model(model) = node {
        if let Some(explicit) = model.texture_path.as_deref() {
            return Some(explicit);
        }
    }

    let mut current = Some(node);
    while let Some(node) = current {
        if let Some(custom) = node.custom_texture_path() {
            return Some(custom);
        }
        current = node.parent().and_then(|parent| forest.get(parent));
    }
    None
}
