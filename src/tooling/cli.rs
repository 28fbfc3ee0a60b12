//! CLI Tooling
//!
//! Command-line interface over the asset engine. Every invocation builds a fresh
//! engine, loads the forests it needs, and applies at most one mutation.

use crate::config::{AppConfig, ConfigLoader};
use crate::engine::AssetEngine;
use crate::error::{ApiError, IndexError};
use crate::gateway::HttpGateway;
use crate::logging::LoggingConfig;
use crate::tooling::format::{
    format_add_outcome, format_directory_listing, format_maps_text, format_tree,
};
use crate::tree::FileNode;
use crate::views::set_expanded_all;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Modelmap CLI - browse a 3D asset catalog and curate map workspaces
#[derive(Parser)]
#[command(name = "modelmap")]
#[command(about = "Browse a 3D asset catalog and curate map workspaces")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides configuration)
    #[arg(long)]
    pub backend: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply logging flags on top of configured logging
    pub fn apply_logging_overrides(&self, logging: &mut LoggingConfig) {
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
    }

    /// Load configuration and apply command-line overrides
    pub fn load_config(&self) -> Result<AppConfig, ApiError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_with_file(path)?,
            None => ConfigLoader::load()?,
        };
        if let Some(backend) = &self.backend {
            config.backend.base_url = backend.clone();
            config.backend.validate().map_err(ApiError::ConfigError)?;
        }
        self.apply_logging_overrides(&mut config.logging);
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List maps known to the backend
    Maps,
    /// Show the model catalog under a directory
    Catalog {
        /// Model directory (defaults to the configured one)
        #[arg(long)]
        directory: Option<String>,
        /// Only show top-level entries
        #[arg(long)]
        collapsed: bool,
    },
    /// Show the models of a map
    Selection {
        /// Map name (defaults to the configured one)
        #[arg(long)]
        map: Option<String>,
    },
    /// Add a catalog model to a map
    Add {
        #[arg(long)]
        map: Option<String>,
        #[arg(long)]
        directory: Option<String>,
        /// Catalog path of the model
        path: String,
    },
    /// Remove a model from a map
    Remove {
        #[arg(long)]
        map: Option<String>,
        /// Map-relative path of the member
        path: String,
    },
    /// Texture override commands
    Texture {
        #[command(subcommand)]
        command: TextureCommands,
    },
    /// List a directory on the backend host
    Browse {
        /// Directory to list (defaults to the configured model directory)
        path: Option<String>,
    },
    /// Print the effective configuration
    Config,
}

#[derive(Subcommand)]
pub enum TextureCommands {
    /// Set a texture override on a model or folder
    Set {
        #[arg(long)]
        directory: Option<String>,
        path: String,
        texture: String,
    },
    /// Clear the texture override on a model or folder
    Clear {
        #[arg(long)]
        directory: Option<String>,
        path: String,
    },
}

/// Everything a command needs: configuration, the HTTP gateway, and the engine
pub struct CliContext {
    config: AppConfig,
    gateway: Arc<HttpGateway>,
    engine: AssetEngine,
}

impl CliContext {
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let gateway = Arc::new(HttpGateway::new(&config.backend)?);
        gateway.set_model_directory(config.session.model_directory.clone());
        let engine = AssetEngine::with_session(gateway.clone(), &config.session);
        Ok(Self {
            config,
            gateway,
            engine,
        })
    }

    pub fn engine(&self) -> &AssetEngine {
        &self.engine
    }

    /// Execute a command and return its text output
    pub async fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Maps => {
                let maps = self.gateway.list_maps().await?;
                Ok(format_maps_text(&maps))
            }
            Commands::Catalog {
                directory,
                collapsed,
            } => {
                self.engine.load_catalog(directory.as_deref()).await?;
                let mut projection = self.engine.project_catalog(&[], |_: &FileNode| None::<()>);
                if !collapsed {
                    set_expanded_all(&mut projection.nodes, true);
                }
                let title = format!(
                    "Catalog ({})",
                    self.engine.active_directory().unwrap_or_default()
                );
                Ok(format_tree(&title, &projection))
            }
            Commands::Selection { map } => {
                self.select_map(map.as_deref());
                self.engine.load_selection().await?;
                let mut projection = self.engine.project_selection(&[], |_: &FileNode| None::<()>);
                set_expanded_all(&mut projection.nodes, true);
                let title = format!("Map ({})", self.engine.current_map()?);
                Ok(format_tree(&title, &projection))
            }
            Commands::Add {
                map,
                directory,
                path,
            } => {
                self.select_map(map.as_deref());
                self.engine.load_catalog(directory.as_deref()).await?;
                self.engine.load_selection().await?;
                let outcome = self.engine.add_to_selection(path).await?;
                let map_name = self.engine.current_map()?;
                info!(map = %map_name, path = outcome.path(), "Add command finished");
                Ok(format_add_outcome(&map_name, &outcome))
            }
            Commands::Remove { map, path } => {
                self.select_map(map.as_deref());
                self.engine.load_selection().await?;
                self.engine.remove_from_selection(path).await?;
                Ok(format!(
                    "Removed \"{}\" from \"{}\".",
                    path,
                    self.engine.current_map()?
                ))
            }
            Commands::Texture { command } => self.execute_texture(command).await,
            Commands::Browse { path } => {
                let path = match path.clone().or_else(|| self.engine.active_directory()) {
                    Some(path) => path,
                    None => self
                        .gateway
                        .os_info()
                        .await?
                        .home
                        .ok_or(IndexError::NoDirectorySelected)?,
                };
                let listing = self.gateway.list_directory(&path).await?;
                Ok(format_directory_listing(&path, &listing))
            }
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
        }
    }

    async fn execute_texture(&self, command: &TextureCommands) -> Result<String, ApiError> {
        match command {
            TextureCommands::Set {
                directory,
                path,
                texture,
            } => {
                self.load_for_texture(directory.as_deref()).await?;
                self.engine.set_texture_override(path, texture).await?;
                Ok(format!("Texture of \"{}\" set to \"{}\".", path, texture))
            }
            TextureCommands::Clear { directory, path } => {
                self.load_for_texture(directory.as_deref()).await?;
                self.engine.clear_texture_override(path).await?;
                Ok(format!("Texture override of \"{}\" cleared.", path))
            }
        }
    }

    /// Texture targets may live in either forest; the map is optional here
    async fn load_for_texture(&self, directory: Option<&str>) -> Result<(), ApiError> {
        self.engine.load_catalog(directory).await?;
        if self.engine.current_map().is_ok() {
            self.engine.load_selection().await?;
        }
        Ok(())
    }

    fn select_map(&self, map: Option<&str>) {
        if let Some(map) = map {
            self.engine.select_map(Some(map.to_string()));
        }
    }
}
