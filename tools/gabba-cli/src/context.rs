//! CLI execution context.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context as _, Result};
use gabba_cache::FileStore;
use gabba_commerce::catalog::Catalog;
use gabba_commerce::notify::LogObserver;
use gabba_commerce::render::CartBadge;
use gabba_commerce::CartStore;

use crate::config::{is_json, CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

/// An open cart store plus the badge tracking it.
pub struct Session {
    pub store: CartStore<FileStore>,
    pub badge: Rc<RefCell<CartBadge>>,
}

impl Session {
    /// Current badge text, `(N)`.
    pub fn badge_text(&self) -> String {
        self.badge.borrow().text()
    }
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            let reason = format!("{e:#}");
                            tracing::warn!(
                                path = %config_path.display(),
                                error = %reason,
                                "skipping unreadable config file"
                            );
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Open the cart store over the configured storage directory.
    pub fn open_store(&self) -> Result<Session> {
        let dir = self.resolve_path(&self.config.storage.dir);
        let storage = FileStore::open(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;
        self.output
            .debug(&format!("Cart storage: {}", storage.dir().display()));

        let mut store = CartStore::open(storage, self.config.store.clone());
        let badge = Rc::new(RefCell::new(CartBadge::default()));
        store.subscribe(LogObserver);
        store.subscribe(self.output.clone());
        store.subscribe(Rc::clone(&badge));

        Ok(Session { store, badge })
    }

    /// Load the product catalog.
    ///
    /// `path` overrides the configured catalog file.
    pub fn load_catalog(&self, path: Option<&str>) -> Result<Catalog> {
        let path = self.resolve_path(path.unwrap_or(&self.config.catalog.path));
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let catalog = if is_json(&path) {
            Catalog::from_json(&content)?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))?
        };

        tracing::debug!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_in(dir: &Path) -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            root.path().join(".gabba.toml"),
            "[storage]\ndir = \"carts\"\n",
        )
        .unwrap();

        let (config, path) = Context::find_config(&nested).unwrap();
        assert_eq!(config.storage.dir, "carts");
        assert_eq!(path, root.path().join(".gabba.toml"));
    }

    #[test]
    fn test_open_store_persists_under_storage_dir() {
        let root = tempfile::tempdir().unwrap();
        let ctx = context_in(root.path());

        let mut session = ctx.open_store().unwrap();
        session
            .store
            .add_item("Gorra", gabba_commerce::Money::new(30000), "", None)
            .unwrap();

        assert_eq!(session.badge_text(), "(1)");
        assert!(root.path().join(".gabba").join("carrito.json").exists());
    }

    #[test]
    fn test_load_toml_catalog() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join("catalog.toml"),
            r#"
            [[products]]
            name = "Gorra"
            price = 30000
            gender = "unisex"
            "#,
        )
        .unwrap();

        let catalog = context_in(root.path())
            .load_catalog(Some("catalog.toml"))
            .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.products[0].is_unisex());
    }
}
