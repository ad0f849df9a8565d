//! Type-safe key-value storage slots for the Gabba storefront.
//!
//! A [`KeyValueStore`] is a durable string-to-string slot map (in memory or
//! on disk). [`Cache`] layers automatic JSON serialization on top.
//!
//! # Example
//!
//! ```rust
//! use gabba_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("carrito", &vec!["Hoodie", "Cap"]).unwrap();
//!
//! // Retrieve a value
//! let lines: Option<Vec<String>> = cache.get("carrito").unwrap();
//! assert_eq!(lines.unwrap().len(), 2);
//!
//! // Delete a value
//! cache.delete("carrito").unwrap();
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
