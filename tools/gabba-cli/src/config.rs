//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use gabba_commerce::StoreConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["gabba.toml", ".gabba.toml", "gabba.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Store behaviour (storage key, shipping, recipient).
    #[serde(default)]
    pub store: StoreConfig,

    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Where the product grid is read from.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Cart persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the storage slots.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".gabba".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog file, JSON or TOML by extension.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default gabba.toml config file.
///
/// Shipping cost is written in whole pesos.
pub fn generate_default_config(store_name: &str) -> Result<String> {
    let mut config = CliConfig::default();
    config.store.store_name = store_name.to_string();

    let body = toml::to_string_pretty(&config).context("Failed to serialize default config")?;
    Ok(format!("# Gabba storefront configuration\n\n{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gabba_commerce::Money;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.storage.dir, ".gabba");
        assert_eq!(config.catalog.path, "catalog.json");
        assert_eq!(config.store.storage_key, "carrito");
    }

    #[test]
    fn test_generated_config_parses() {
        let content = generate_default_config("MI TIENDA").unwrap();
        assert!(content.starts_with("# Gabba storefront configuration"));

        let config: CliConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.store.store_name, "MI TIENDA");
        assert_eq!(config.store.shipping_cost, Money::new(5000));
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_generated_config_escapes_store_name() {
        let name = r#"La "Gabba" \ Store"#;
        let content = generate_default_config(name).unwrap();

        let config: CliConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.store.store_name, name);
    }

    #[test]
    fn test_partial_store_section() {
        let config: CliConfig = toml::from_str(
            r#"
            [store]
            shipping_cost = 8000

            [storage]
            dir = "/var/lib/gabba"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.shipping_cost, Money::new(8000));
        assert_eq!(config.store.whatsapp_recipient, "573104273591");
        assert_eq!(config.storage.dir, "/var/lib/gabba");
    }

    #[test]
    fn test_load_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gabba.json");
        std::fs::write(&path, r#"{"catalog": {"path": "productos.toml"}}"#).unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.catalog.path, "productos.toml");
        assert_eq!(config.storage, StorageConfig::default());
    }
}
