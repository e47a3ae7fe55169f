use crate::args::ArgsOptional;
use crate::error::GatehouseError;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = ".gatehouse";
const CONFIG_FILE: &str = "config.toml";

/// Reads the optional `~/.gatehouse/config.toml` holding defaults for the command line.
///
/// ```toml
/// api_url = "http://admin.internal:8000"
/// username = "admin"
/// page_size = 50
/// ```
pub struct ConfigManager {
    path: Option<PathBuf>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            path: dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE)),
        }
    }
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns empty defaults when there is no config file.
    pub async fn load(&self) -> Result<ArgsOptional, GatehouseError> {
        let Some(path) = &self.path else {
            return Ok(ArgsOptional::default());
        };

        if !tokio::fs::try_exists(path).await? {
            debug!("Config file {} does not exist", path.display());
            return Ok(ArgsOptional::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let args = toml::from_str(&content)
            .map_err(|_| GatehouseError::CannotLoadResource(path.display().to_string()))?;
        debug!("Loaded config file {}", path.display());
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gatehouse-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn missing_file_should_yield_defaults() {
        let manager = ConfigManager::new(temp_path("missing.toml"));
        let args = manager.load().await.unwrap();
        assert_eq!(args, ArgsOptional::default());
    }

    #[tokio::test]
    async fn file_should_be_parsed_as_optional_args() {
        let path = temp_path("config.toml");
        tokio::fs::write(
            &path,
            "api_url = \"http://admin.internal:8000\"\nusername = \"admin\"\npage_size = 50\n",
        )
        .await
        .unwrap();

        let args = ConfigManager::new(path.clone()).load().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(args.api_url.as_deref(), Some("http://admin.internal:8000"));
        assert_eq!(args.username.as_deref(), Some("admin"));
        assert_eq!(args.page_size, Some(50));
        assert_eq!(args.timeout, None);
    }

    #[tokio::test]
    async fn malformed_file_should_be_rejected() {
        let path = temp_path("broken.toml");
        tokio::fs::write(&path, "page_size = \"many\"").await.unwrap();

        let result = ConfigManager::new(path.clone()).load().await;
        tokio::fs::remove_file(&path).await.unwrap();
        assert!(matches!(result, Err(GatehouseError::CannotLoadResource(_))));
    }
}
