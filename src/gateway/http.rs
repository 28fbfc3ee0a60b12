//! HTTP implementation of the backend gateway.

use super::endpoints::Endpoint;
use super::{AddedMember, Gateway};
use crate::config::BackendConfig;
use crate::error::GatewayError;
use crate::tree::RemoteNode;
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

/// Host path conventions reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsInfo {
    pub delimiter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
}

/// Directory listing: entry name -> is directory
pub type DirectoryListing = BTreeMap<String, bool>;

#[derive(Debug, Serialize)]
struct AddMemberBody<'a> {
    #[serde(rename = "modelPath")]
    model_path: &'a str,
    #[serde(rename = "texturePath", skip_serializing_if = "Option::is_none")]
    texture_path: Option<&'a str>,
}

/// Gateway backed by the asset backend's REST API
///
/// Several routes are scoped to the model directory the catalog was listed from.
/// The gateway remembers the directory of its last successful catalog listing and
/// sends it along on those routes.
pub struct HttpGateway {
    client: Client,
    base: Url,
    model_directory: RwLock<Option<String>>,
}

impl HttpGateway {
    /// Create a gateway from backend configuration
    pub fn new(config: &BackendConfig) -> Result<Self, GatewayError> {
        let base = Url::parse(config.base_url.trim()).map_err(|e| {
            GatewayError::Config(format!("Invalid backend URL {}: {}", config.base_url, e))
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base,
            model_directory: RwLock::new(None),
        })
    }

    /// Scope directory-bound routes to `directory` without listing it first
    pub fn set_model_directory(&self, directory: Option<String>) {
        *self.model_directory.write() = directory;
    }

    pub fn model_directory(&self) -> Option<String> {
        self.model_directory.read().clone()
    }

    fn require_model_directory(&self) -> Result<String, GatewayError> {
        self.model_directory()
            .ok_or_else(|| GatewayError::Config("Must select a model directory first".to_string()))
    }

    /// Names of all maps known to the backend
    pub async fn list_maps(&self) -> Result<Vec<String>, GatewayError> {
        let url = Endpoint::Maps.url(&self.base, &[], &[])?;
        self.fetch_json(self.client.get(url)).await
    }

    /// Entries of a host directory, for directory and texture pickers
    pub async fn list_directory(&self, path: &str) -> Result<DirectoryListing, GatewayError> {
        let url = Endpoint::Directories.url(&self.base, &[], &[("path", path)])?;
        self.fetch_json(self.client.get(url)).await
    }

    pub async fn os_info(&self) -> Result<OsInfo, GatewayError> {
        let url = Endpoint::DirectoriesInfo.url(&self.base, &[], &[])?;
        self.fetch_json(self.client.get(url)).await
    }

    /// URL the renderer can fetch a mesh or texture file from
    pub fn file_url(&self, path: &str) -> Result<Url, GatewayError> {
        Endpoint::File.url(&self.base, &[], &[("path", path)])
    }

    pub fn map_image_url(&self, map_name: &str) -> Result<Url, GatewayError> {
        Endpoint::MapImage.url(&self.base, &[("map", map_name)], &[])
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Http {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn texture_request(
        &self,
        method: Method,
        target_path: &str,
        texture_path: Option<&str>,
    ) -> Result<(), GatewayError> {
        let model_directory = self.require_model_directory()?;
        let mut query = vec![
            ("modelDirectory", model_directory.as_str()),
            ("modelPath", target_path),
        ];
        if let Some(texture_path) = texture_path {
            query.push(("texturePath", texture_path));
        }
        let url = Endpoint::ModelTextures.url(&self.base, &[], &query)?;
        self.send(self.client.request(method, url)).await?;
        Ok(())
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn list_catalog(&self, directory: &str) -> Result<Vec<RemoteNode>, GatewayError> {
        debug!(directory, "Loading model index");
        let url = Endpoint::Models.url(&self.base, &[], &[("modelDirectory", directory)])?;
        let nodes = self.fetch_json(self.client.get(url)).await?;
        self.set_model_directory(Some(directory.to_string()));
        Ok(nodes)
    }

    async fn list_selection(&self, map_name: &str) -> Result<Vec<RemoteNode>, GatewayError> {
        debug!(map = map_name, "Loading map models");
        let url = Endpoint::MapModels.url(&self.base, &[("map", map_name)], &[])?;
        self.fetch_json(self.client.get(url)).await
    }

    async fn add_to_selection(
        &self,
        map_name: &str,
        source_path: &str,
        inherited_texture_path: Option<&str>,
    ) -> Result<AddedMember, GatewayError> {
        debug!(map = map_name, model = source_path, "Adding model to map");
        let model_directory = self.require_model_directory()?;
        let url = Endpoint::MapModels.url(
            &self.base,
            &[("map", map_name)],
            &[("modelDirectory", model_directory.as_str())],
        )?;
        let body = AddMemberBody {
            model_path: source_path,
            texture_path: inherited_texture_path,
        };
        self.fetch_json(self.client.post(url).json(&body)).await
    }

    async fn remove_from_selection(
        &self,
        map_name: &str,
        member_name: &str,
    ) -> Result<(), GatewayError> {
        debug!(map = map_name, member = member_name, "Removing model from map");
        let url = Endpoint::MapModel.url(
            &self.base,
            &[("map", map_name), ("model", member_name)],
            &[],
        )?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn set_texture_override(
        &self,
        target_path: &str,
        texture_path: &str,
    ) -> Result<(), GatewayError> {
        self.texture_request(Method::POST, target_path, Some(texture_path))
            .await
    }

    async fn clear_texture_override(&self, target_path: &str) -> Result<(), GatewayError> {
        self.texture_request(Method::DELETE, target_path, None).await
    }
}
