use std::fs;

use modelmap::config::AppConfig;
use modelmap::tooling::cli::{CliContext, Commands};
use modelmap::IndexError;
use modelmap::ApiError;
use tempfile::TempDir;

fn offline_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.backend.base_url = "http://127.0.0.1:9".to_string();
    config.backend.timeout_secs = 1;
    config
}

#[tokio::test]
async fn config_command_renders_effective_config() {
    let mut config = offline_config();
    config.session.map_name = Some("arena".to_string());
    let context = CliContext::new(config).unwrap();

    let output = context.execute(&Commands::Config).await.unwrap();
    let parsed: toml::Value = toml::from_str(&output).unwrap();

    assert_eq!(
        parsed["backend"]["base_url"].as_str(),
        Some("http://127.0.0.1:9")
    );
    assert_eq!(parsed["session"]["map_name"].as_str(), Some("arena"));
}

#[tokio::test]
async fn selection_command_without_map_fails_before_network() {
    let context = CliContext::new(offline_config()).unwrap();

    let err = context
        .execute(&Commands::Selection { map: None })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Index(IndexError::NoMapSelected)));
}

#[tokio::test]
async fn catalog_command_without_directory_fails_before_network() {
    let context = CliContext::new(offline_config()).unwrap();

    let err = context
        .execute(&Commands::Catalog {
            directory: None,
            collapsed: false,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Index(IndexError::NoDirectorySelected)));
}

#[test]
fn explicit_config_file_is_layered_in() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("modelmap.toml");
    fs::write(
        &path,
        "[backend]\nbase_url = \"http://assets.internal:9000\"\n\n[session]\nmodel_directory = \"/srv/assets\"\n",
    )
    .unwrap();

    let config = modelmap::config::ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.backend.base_url, "http://assets.internal:9000");
    assert_eq!(config.session.model_directory.as_deref(), Some("/srv/assets"));

    let context = CliContext::new(config).unwrap();
    assert_eq!(
        context.engine().active_directory().as_deref(),
        Some("/srv/assets")
    );
}
