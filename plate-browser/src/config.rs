use std::path::Path;

use anyhow::Context;
use plate_core::module::catalog::{CatalogFilter, SortOrder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Dataset JSON with the `numberScopes` list
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Favorite/exclude marks file
    #[serde(default = "default_store")]
    pub store: String,

    #[serde(default)]
    pub filter: ViewFilter,

    #[serde(default)]
    pub actions: StoreActions,
}

/// Catalog filter plus the toggles that depend on user marks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewFilter {
    #[serde(flatten)]
    pub catalog: CatalogFilter,
    pub hide_excluded: bool,
    pub favorites_only: bool,
    pub order: SortOrder,
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self {
            catalog: CatalogFilter::default(),
            hide_excluded: true,
            favorites_only: false,
            order: SortOrder::default(),
        }
    }
}

/// Marks to apply to the store before listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreActions {
    pub favorite: Vec<String>,
    pub exclude: Vec<String>,
    pub clear: Vec<String>,
}

impl StoreActions {
    pub fn is_empty(&self) -> bool {
        self.favorite.is_empty() && self.exclude.is_empty() && self.clear.is_empty()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_dataset() -> String {
    "data.json".to_string()
}

fn default_store() -> String {
    "favorites.json".to_string()
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            dataset: default_dataset(),
            store: default_store(),
            filter: ViewFilter::default(),
            actions: StoreActions::default(),
        }
    }
}

impl BrowserConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: BrowserConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        Ok(config)
    }

    /// Like [`from_file`](Self::from_file), but a missing file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
log_level = "debug"
dataset = "plates.json"

[filter]
keyword = "AD*88"
exclude_four = true
favorites_only = true
order = "level"

[actions]
favorite = ["AD12388"]
"#,
        )
        .unwrap();

        let config = BrowserConfig::from_file(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir, "logs");
        assert_eq!(config.dataset, "plates.json");
        assert_eq!(config.store, "favorites.json");
        assert_eq!(config.filter.catalog.keyword, "AD*88");
        assert!(config.filter.catalog.exclude_four);
        assert!(!config.filter.catalog.numeric_only);
        assert!(config.filter.hide_excluded);
        assert!(config.filter.favorites_only);
        assert_eq!(config.filter.order, SortOrder::Level);
        assert_eq!(config.actions.favorite, vec!["AD12388"]);
        assert!(config.actions.exclude.is_empty());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = BrowserConfig::load_or_default(temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.filter, ViewFilter::default());
        assert!(config.actions.is_empty());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "log_level = [").unwrap();
        assert!(BrowserConfig::from_file(&path).is_err());
    }
}
