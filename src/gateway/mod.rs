//! Backend gateway contract.
//!
//! The backend is authoritative for catalog listings, map membership, and texture
//! overrides. The engine only talks to it through this trait, which keeps the
//! transport swappable (HTTP in production, in-memory in tests).

pub mod endpoints;
pub mod http;

use crate::error::GatewayError;
use crate::tree::RemoteNode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use http::HttpGateway;

/// Canonical paths of a model after it was copied into a map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedMember {
    #[serde(rename = "modelPath", alias = "resultPath")]
    pub result_path: String,
    #[serde(
        default,
        rename = "texturePath",
        alias = "resultTexturePath",
        skip_serializing_if = "Option::is_none"
    )]
    pub result_texture_path: Option<String>,
}

/// Abstract backend operations consumed by the asset engine
#[async_trait]
pub trait Gateway: Send + Sync {
    /// List the catalog forest under `directory`.
    async fn list_catalog(&self, directory: &str) -> Result<Vec<RemoteNode>, GatewayError>;

    /// List the current members of `map_name`.
    async fn list_selection(&self, map_name: &str) -> Result<Vec<RemoteNode>, GatewayError>;

    /// Copy a model into a map, carrying its inherited texture along.
    async fn add_to_selection(
        &self,
        map_name: &str,
        source_path: &str,
        inherited_texture_path: Option<&str>,
    ) -> Result<AddedMember, GatewayError>;

    /// Remove a member from a map by its name.
    async fn remove_from_selection(
        &self,
        map_name: &str,
        member_name: &str,
    ) -> Result<(), GatewayError>;

    async fn set_texture_override(
        &self,
        target_path: &str,
        texture_path: &str,
    ) -> Result<(), GatewayError>;

    async fn clear_texture_override(&self, target_path: &str) -> Result<(), GatewayError>;
}
