//! Omnibar configuration

use directories::ProjectDirs;
use omnibar_suggest::{ProviderRegistry, SearchProvider};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the history/bookmarks database
    pub database_path: PathBuf,
    /// Committed text of a fresh address bar
    pub homepage: String,
    /// Most candidates shown in the list
    pub max_suggestions: usize,
    /// Search shortcuts, unique by shortcut
    pub providers: Vec<SearchProvider>,
}

impl Config {
    pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("omnibar.db"),
            homepage: "about:blank".to_string(),
            max_suggestions: Self::DEFAULT_MAX_SUGGESTIONS,
            providers: ProviderRegistry::default_providers(),
        }
    }

    pub fn data_dir() -> PathBuf {
        ProjectDirs::from("org", "Omnibar", "Omnibar")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".omnibar"))
    }

    /// Read a JSON config file; missing keys take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Validated provider registry
    pub fn registry(&self) -> Result<ProviderRegistry> {
        Ok(ProviderRegistry::new(self.providers.clone())?)
    }

    fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(CoreError::Config(
                "max_suggestions must be at least 1".to_string(),
            ));
        }
        self.registry().map(|_| ())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::new(PathBuf::from("/data"));
        assert_eq!(config.database_path, PathBuf::from("/data/omnibar.db"));
        assert_eq!(config.max_suggestions, 10);
        assert_eq!(config.registry().unwrap().len(), 8);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::new(dir.path().to_path_buf());
        config.homepage = "https://brave.com".to_string();
        config.max_suggestions = 4;
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_keys_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"homepage": "https://example.com"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.homepage, "https://example.com");
        assert_eq!(config.max_suggestions, 10);
        assert_eq!(config.providers.len(), 8);
    }

    #[test]
    fn test_rejects_duplicate_shortcuts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::new(dir.path().to_path_buf());
        config.providers.push(SearchProvider::new(
            "Other",
            ":g",
            "https://other.test/icon.png",
            "https://other.test/?q=%s",
        ));
        config.save(&path).unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(CoreError::Suggest(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            Config::load(dir.path().join("absent.json")),
            Err(CoreError::Io(_))
        ));
    }
}
