//! Wire shape of catalog and map listings as returned by the backend.

use serde::{Deserialize, Serialize};

/// A node as the backend lists it: owned children, no parent links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RemoteNode {
    Directory {
        path: String,
        name: String,
        #[serde(default)]
        children: Vec<RemoteNode>,
        #[serde(
            default,
            rename = "customTexturePath",
            skip_serializing_if = "Option::is_none"
        )]
        custom_texture_path: Option<String>,
    },
    Model {
        #[serde(alias = "modelPath")]
        path: String,
        name: String,
        #[serde(default, rename = "texturePath", skip_serializing_if = "Option::is_none")]
        texture_path: Option<String>,
        #[serde(
            default,
            rename = "customTexturePath",
            skip_serializing_if = "Option::is_none"
        )]
        custom_texture_path: Option<String>,
    },
}

impl RemoteNode {
    /// Convenience constructor for a directory
    pub fn directory(path: &str, name: &str, children: Vec<RemoteNode>) -> Self {
        RemoteNode::Directory {
            path: path.to_string(),
            name: name.to_string(),
            children,
            custom_texture_path: None,
        }
    }

    /// Convenience constructor for a model without textures
    pub fn model(path: &str, name: &str) -> Self {
        RemoteNode::Model {
            path: path.to_string(),
            name: name.to_string(),
            texture_path: None,
            custom_texture_path: None,
        }
    }

    pub fn with_custom_texture(mut self, texture: &str) -> Self {
        match &mut self {
            RemoteNode::Directory {
                custom_texture_path,
                ..
            }
            | RemoteNode::Model {
                custom_texture_path,
                ..
            } => *custom_texture_path = Some(texture.to_string()),
        }
        self
    }

    pub fn with_texture(mut self, texture: &str) -> Self {
        if let RemoteNode::Model { texture_path, .. } = &mut self {
            *texture_path = Some(texture.to_string());
        }
        self
    }
}
