//! Asset Index Engine
//!
//! Owns the catalog forest, the selection forest, and the unified path index, and
//! applies every mutation so that the index is never observably out of step with
//! the forests. Writes are confirm-then-mutate: local state changes only after the
//! gateway reports success.
//!
//! Loads are single-flight per forest. Other mutations rely on the caller issuing one
//! interactive action at a time. State locks are never held across a gateway await.

use crate::concurrency::InFlight;
use crate::config::SessionConfig;
use crate::error::IndexError;
use crate::gateway::Gateway;
use crate::index::{NodeRef, PathIndex};
use crate::texture::effective_texture;
use crate::tree::{FileNode, Forest, ModelNode};
use crate::types::{AddOutcome, ForestKind, LoadOutcome, NodeKind};
use crate::views::{self, DisplayNode, Projection};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

struct EngineState {
    catalog: Forest,
    selection: Forest,
    index: PathIndex,
}

impl EngineState {
    fn forest(&self, kind: ForestKind) -> &Forest {
        match kind {
            ForestKind::Catalog => &self.catalog,
            ForestKind::Selection => &self.selection,
        }
    }

    fn forest_mut(&mut self, kind: ForestKind) -> &mut Forest {
        match kind {
            ForestKind::Catalog => &mut self.catalog,
            ForestKind::Selection => &mut self.selection,
        }
    }

    fn reindex(&mut self) {
        self.index.rebuild(&self.catalog, &self.selection);
    }

    fn resolve(&self, path: &str) -> Result<(NodeRef, &FileNode), IndexError> {
        let node_ref = self
            .index
            .get(path)
            .ok_or_else(|| IndexError::NotFound(path.to_string()))?;
        let node = self
            .forest(node_ref.forest)
            .get(node_ref.id)
            .ok_or_else(|| IndexError::NotFound(path.to_string()))?;
        Ok((node_ref, node))
    }

    fn resolve_model(&self, path: &str) -> Result<(NodeRef, &ModelNode), IndexError> {
        let (node_ref, node) = self.resolve(path)?;
        let model = node.as_model().ok_or_else(|| IndexError::WrongNodeType {
            path: path.to_string(),
            expected: NodeKind::Model,
        })?;
        Ok((node_ref, model))
    }
}

/// Session inputs the engine operates on
#[derive(Debug, Clone, Default)]
struct Session {
    map_name: Option<String>,
    directory: Option<String>,
}

/// Asset index engine
///
/// Construct one per session and share it by reference (or `Arc`) with every
/// consumer; its forests are reachable only through these operations.
pub struct AssetEngine {
    gateway: Arc<dyn Gateway>,
    state: RwLock<EngineState>,
    session: RwLock<Session>,
    catalog_load: InFlight,
    selection_load: InFlight,
}

impl AssetEngine {
    /// Create an engine with empty forests and no session inputs
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self::with_session(gateway, &SessionConfig::default())
    }

    /// Create an engine seeded with a selected map and active directory
    pub fn with_session(gateway: Arc<dyn Gateway>, session: &SessionConfig) -> Self {
        Self {
            gateway,
            state: RwLock::new(EngineState {
                catalog: Forest::new(),
                selection: Forest::new(),
                index: PathIndex::new(),
            }),
            session: RwLock::new(Session {
                map_name: session.map_name.clone(),
                directory: session.model_directory.clone(),
            }),
            catalog_load: InFlight::new(),
            selection_load: InFlight::new(),
        }
    }

    /// Select the map that selection operations apply to (`None` deselects)
    pub fn select_map(&self, map_name: Option<String>) {
        debug!(map = ?map_name, "Selecting map");
        self.session.write().map_name = map_name;
    }

    /// Name of the selected map
    pub fn current_map(&self) -> Result<String, IndexError> {
        self.session
            .read()
            .map_name
            .clone()
            .ok_or(IndexError::NoMapSelected)
    }

    /// Directory of the last successful catalog load, or the configured seed
    pub fn active_directory(&self) -> Option<String> {
        self.session.read().directory.clone()
    }

    /// Load the catalog forest under `directory` (or the active directory)
    ///
    /// Returns `Skipped` without touching the backend if a catalog load is already
    /// in flight. On failure the previous catalog and index stay in place.
    pub async fn load_catalog(&self, directory: Option<&str>) -> Result<LoadOutcome, IndexError> {
        let Some(_guard) = self.catalog_load.try_claim() else {
            debug!("Catalog load already in flight, skipping");
            return Ok(LoadOutcome::Skipped);
        };

        let directory = match directory {
            Some(directory) => directory.to_string(),
            None => self.active_directory().ok_or(IndexError::NoDirectorySelected)?,
        };
        if directory.trim().is_empty() {
            return Err(IndexError::NoDirectorySelected);
        }

        let nodes = self.gateway.list_catalog(&directory).await?;
        let forest = Forest::from_remote(nodes);
        let count = forest.len();
        {
            let mut state = self.state.write();
            state.catalog = forest;
            state.reindex();
        }
        info!(directory = %directory, nodes = count, "Loaded catalog");
        self.session.write().directory = Some(directory);

        Ok(LoadOutcome::Loaded { nodes: count })
    }

    /// Load the selection forest of the selected map
    pub async fn load_selection(&self) -> Result<LoadOutcome, IndexError> {
        let Some(_guard) = self.selection_load.try_claim() else {
            debug!("Selection load already in flight, skipping");
            return Ok(LoadOutcome::Skipped);
        };

        let map_name = self.current_map()?;
        let nodes = self.gateway.list_selection(&map_name).await?;
        let forest = Forest::from_remote(nodes);
        let count = forest.len();
        {
            let mut state = self.state.write();
            state.selection = forest;
            state.reindex();
        }
        info!(map = %map_name, nodes = count, "Loaded map models");

        Ok(LoadOutcome::Loaded { nodes: count })
    }

    /// Look up any node by path
    pub fn lookup_node(&self, path: &str) -> Result<FileNode, IndexError> {
        let state = self.state.read();
        state.resolve(path).map(|(_, node)| node.clone())
    }

    /// Look up a model by path; directories fail with `WrongNodeType`
    pub fn lookup_model(&self, path: &str) -> Result<ModelNode, IndexError> {
        let state = self.state.read();
        state.resolve_model(path).map(|(_, model)| model.clone())
    }

    /// Which forest `path` lives in, if indexed
    pub fn locate(&self, path: &str) -> Option<ForestKind> {
        self.state.read().index.get(path).map(|node_ref| node_ref.forest)
    }

    /// Effective texture of the node at `path`
    pub fn effective_texture(&self, path: &str) -> Result<Option<String>, IndexError> {
        let state = self.state.read();
        let (node_ref, _) = state.resolve(path)?;
        Ok(effective_texture(state.forest(node_ref.forest), node_ref.id).map(str::to_string))
    }

    /// Add the model at `path` to the selected map
    ///
    /// If the backend answers with a path that is already a member, that member's
    /// texture is updated instead of adding a second node, so retries are harmless.
    /// A path already held by a catalog node fails with `PathConflict` and leaves
    /// both forests untouched.
    pub async fn add_to_selection(&self, path: &str) -> Result<AddOutcome, IndexError> {
        let (source, inherited) = {
            let state = self.state.read();
            let (node_ref, model) = state.resolve_model(path)?;
            let inherited = effective_texture(state.forest(node_ref.forest), node_ref.id)
                .map(str::to_string);
            (model.clone(), inherited)
        };
        let map_name = self.current_map()?;

        let added = self
            .gateway
            .add_to_selection(&map_name, &source.path, inherited.as_deref())
            .await?;

        let mut state = self.state.write();
        match state.index.get(&added.result_path) {
            Some(NodeRef {
                forest: ForestKind::Selection,
                id,
            }) => {
                if let Some(member) = state.selection.get_mut(id).and_then(FileNode::as_model_mut) {
                    member.texture_path = added.result_texture_path.clone();
                }
                info!(map = %map_name, path = %added.result_path, "Model already in map, merged");
                return Ok(AddOutcome::Merged(added.result_path));
            }
            Some(NodeRef {
                forest: ForestKind::Catalog,
                ..
            }) => {
                warn!(map = %map_name, path = %added.result_path, "Member path collides with catalog node");
                return Err(IndexError::PathConflict(added.result_path));
            }
            None => {}
        }

        state.selection.push_root_model(ModelNode {
            path: added.result_path.clone(),
            name: source.name,
            texture_path: added.result_texture_path,
            custom_texture_path: None,
            parent: None,
        });
        state.reindex();
        info!(map = %map_name, source = %source.path, path = %added.result_path, "Added model to map");

        Ok(AddOutcome::Added(added.result_path))
    }

    /// Remove the member model at `path` from the selected map
    ///
    /// Nothing changes locally unless the backend confirms the removal.
    pub async fn remove_from_selection(&self, path: &str) -> Result<(), IndexError> {
        let member_name = {
            let state = self.state.read();
            let (node_ref, model) = state.resolve_model(path)?;
            if node_ref.forest != ForestKind::Selection {
                return Err(IndexError::NotFound(path.to_string()));
            }
            model.name.clone()
        };
        let map_name = self.current_map()?;

        self.gateway
            .remove_from_selection(&map_name, &member_name)
            .await?;

        let mut state = self.state.write();
        match state.index.get(path) {
            Some(NodeRef {
                forest: ForestKind::Selection,
                id,
            }) => {
                state.selection.remove(id);
                state.reindex();
                info!(map = %map_name, path, "Removed model from map");
            }
            _ => debug!(path, "Member already gone after removal"),
        }
        Ok(())
    }

    /// Set a texture override on the node at `path`; descendants inherit it on resolution
    pub async fn set_texture_override(&self, path: &str, texture_path: &str) -> Result<(), IndexError> {
        self.state.read().resolve(path)?;
        self.gateway.set_texture_override(path, texture_path).await?;
        self.apply_texture_override(path, Some(texture_path.to_string()));
        Ok(())
    }

    /// Clear the texture override on the node at `path`
    pub async fn clear_texture_override(&self, path: &str) -> Result<(), IndexError> {
        self.state.read().resolve(path)?;
        self.gateway.clear_texture_override(path).await?;
        self.apply_texture_override(path, None);
        Ok(())
    }

    fn apply_texture_override(&self, path: &str, texture_path: Option<String>) {
        let mut state = self.state.write();
        let Some(node_ref) = state.index.get(path) else {
            warn!(path, "Node vanished before texture override was applied");
            return;
        };
        if let Some(node) = state.forest_mut(node_ref.forest).get_mut(node_ref.id) {
            debug!(path, texture = ?texture_path, "Applied texture override");
            node.set_custom_texture_path(texture_path);
        }
    }

    /// Snapshot of the catalog forest
    pub fn catalog(&self) -> Forest {
        self.state.read().catalog.clone()
    }

    /// Snapshot of the selection forest
    pub fn selection(&self) -> Forest {
        self.state.read().selection.clone()
    }

    pub fn index_len(&self) -> usize {
        self.state.read().index.len()
    }

    /// Every indexed path, sorted
    pub fn indexed_paths(&self) -> Vec<String> {
        let state = self.state.read();
        let mut paths: Vec<String> = state.index.paths().map(str::to_string).collect();
        paths.sort();
        paths
    }

    /// Project the catalog forest for display
    pub fn project_catalog<A, F>(&self, previous: &[DisplayNode<A>], affordance: F) -> Projection<A>
    where
        F: FnMut(&FileNode) -> Option<A>,
    {
        views::project(&self.state.read().catalog, previous, affordance)
    }

    /// Project the selection forest for display
    pub fn project_selection<A, F>(&self, previous: &[DisplayNode<A>], affordance: F) -> Projection<A>
    where
        F: FnMut(&FileNode) -> Option<A>,
    {
        views::project(&self.state.read().selection, previous, affordance)
    }
}
