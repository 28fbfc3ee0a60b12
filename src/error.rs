//! Error types for the asset index, the backend gateway, and the tooling surface.

use crate::types::{NodeKind, NodePath};
use thiserror::Error;

/// Failures reported by a backend gateway implementation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Gateway configuration error: {0}")]
    Config(String),
}

/// Errors surfaced by the asset index engine
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Must select a map first")]
    NoMapSelected,

    #[error("Must select a directory first")]
    NoDirectorySelected,

    #[error("Node not found: {0}")]
    NotFound(NodePath),

    #[error("Node {path} is not a {expected}")]
    WrongNodeType { path: NodePath, expected: NodeKind },

    /// The backend placed a map member at a path the catalog already owns
    #[error("Path {0} is already taken by a catalog node")]
    PathConflict(NodePath),

    #[error("Gateway failure: {0}")]
    GatewayFailure(#[from] GatewayError),
}

/// Errors at the application boundary (configuration, logging, CLI)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
