//! Modelmap: Hierarchical 3D Asset Catalog Indexing
//!
//! Mirrors two remote trees, the global model catalog and the models of a
//! selected map, behind a single path index, and keeps both in step with an
//! asset backend through confirm-then-mutate writes.

pub mod concurrency;
pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod index;
pub mod logging;
pub mod texture;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;

pub use engine::AssetEngine;
pub use error::{ApiError, GatewayError, IndexError};
pub use gateway::{AddedMember, Gateway, HttpGateway};
pub use tree::{DirectoryNode, FileNode, Forest, ModelNode, RemoteNode};
pub use types::{AddOutcome, ForestKind, LoadOutcome, NodeId, NodeKind, NodePath};
