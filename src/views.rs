//! Display Views
//!
//! Projects a domain forest into display-ready trees. A projection is rebuilt from
//! scratch on every pass; the only state carried over from the previous tree is each
//! directory's expansion flag, matched by display id within the same sibling level.
//! Display ids are the node paths, so they stay stable when siblings are inserted
//! or moved.

use crate::texture::effective_texture;
use crate::tree::{FileNode, Forest};
use crate::types::{NodeId, NodeKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Icon selector for a display row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    FolderClosed,
    FolderOpen,
    /// `textured` is whether the model resolves to any effective texture
    Model { textured: bool },
}

impl Icon {
    pub fn folder(expanded: bool) -> Self {
        if expanded {
            Icon::FolderOpen
        } else {
            Icon::FolderClosed
        }
    }
}

/// One row of a display tree
///
/// `id` is the wrapped node's path, i.e. its key in the engine index; click handlers
/// resolve it back to the domain node through the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayNode<A = ()> {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub is_expanded: bool,
    pub icon: Icon,
    /// Caller-defined secondary action (add, remove, ...)
    pub secondary: Option<A>,
    pub children: Vec<DisplayNode<A>>,
}

/// Counts gathered while projecting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectionSummary {
    pub models: usize,
    pub directories: usize,
}

/// Result of a projection pass
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<A = ()> {
    pub nodes: Vec<DisplayNode<A>>,
    pub summary: ProjectionSummary,
}

/// Project `forest` into display nodes, carrying expansion state over from `previous`
///
/// `affordance` is invoked once per node, in display order, to attach a secondary
/// action element.
pub fn project<A, F>(forest: &Forest, previous: &[DisplayNode<A>], mut affordance: F) -> Projection<A>
where
    F: FnMut(&FileNode) -> Option<A>,
{
    let mut summary = ProjectionSummary::default();
    let nodes = project_level(forest, forest.roots(), previous, &mut affordance, &mut summary);
    Projection { nodes, summary }
}

fn project_level<A, F>(
    forest: &Forest,
    ids: &[NodeId],
    previous: &[DisplayNode<A>],
    affordance: &mut F,
    summary: &mut ProjectionSummary,
) -> Vec<DisplayNode<A>>
where
    F: FnMut(&FileNode) -> Option<A>,
{
    let prior: HashMap<&str, &DisplayNode<A>> =
        previous.iter().map(|node| (node.id.as_str(), node)).collect();

    let mut level = Vec::with_capacity(ids.len());
    for &id in ids {
        let Some(node) = forest.get(id) else {
            continue;
        };
        let before = prior.get(node.path()).copied();
        let secondary = affordance(node);

        let display = match node {
            FileNode::Directory(dir) => {
                summary.directories += 1;
                let is_expanded = before.map(|b| b.is_expanded).unwrap_or(false);
                let previous_children = before.map(|b| b.children.as_slice()).unwrap_or(&[]);
                let children =
                    project_level(forest, &dir.children, previous_children, affordance, summary);
                DisplayNode {
                    id: dir.path.clone(),
                    label: dir.name.clone(),
                    kind: NodeKind::Directory,
                    is_expanded,
                    icon: Icon::folder(is_expanded),
                    secondary,
                    children,
                }
            }
            FileNode::Model(model) => {
                summary.models += 1;
                DisplayNode {
                    id: model.path.clone(),
                    label: model.name.clone(),
                    kind: NodeKind::Model,
                    is_expanded: false,
                    icon: Icon::Model {
                        textured: effective_texture(forest, id).is_some(),
                    },
                    secondary,
                    children: Vec::new(),
                }
            }
        };
        level.push(display);
    }
    level
}

/// Toggle a directory's expansion flag in place
///
/// Returns the new flag, or `None` if `id` is not a directory in `nodes`.
pub fn toggle_expanded<A>(nodes: &mut [DisplayNode<A>], id: &str) -> Option<bool> {
    let node = find_mut(nodes, id)?;
    if node.kind != NodeKind::Directory {
        return None;
    }
    node.is_expanded = !node.is_expanded;
    node.icon = Icon::folder(node.is_expanded);
    Some(node.is_expanded)
}

/// Expand or collapse every directory
pub fn set_expanded_all<A>(nodes: &mut [DisplayNode<A>], expanded: bool) {
    for node in nodes {
        if node.kind == NodeKind::Directory {
            node.is_expanded = expanded;
            node.icon = Icon::folder(expanded);
        }
        set_expanded_all(&mut node.children, expanded);
    }
}

pub fn find<'a, A>(nodes: &'a [DisplayNode<A>], id: &str) -> Option<&'a DisplayNode<A>> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find(&node.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_mut<'a, A>(nodes: &'a mut [DisplayNode<A>], id: &str) -> Option<&'a mut DisplayNode<A>> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Rows a tree widget would show: depth-first, descending only into expanded directories
pub fn visible_rows<A>(nodes: &[DisplayNode<A>]) -> Vec<(usize, &DisplayNode<A>)> {
    fn walk<'a, A>(nodes: &'a [DisplayNode<A>], depth: usize, rows: &mut Vec<(usize, &'a DisplayNode<A>)>) {
        for node in nodes {
            rows.push((depth, node));
            if node.is_expanded {
                walk(&node.children, depth + 1, rows);
            }
        }
    }

    let mut rows = Vec::new();
    walk(nodes, 0, &mut rows);
    rows
}
