//! Storefront domain types and logic for GABBA STORE.
//!
//! This crate provides the pieces behind a small storefront:
//!
//! - **Cart**: lines, quantities and totals, persisted through [`CartStore`]
//! - **Catalog**: the static product grid
//! - **Search**: attribute filters and free-text search
//! - **Checkout**: customer details and the order message hand-off
//! - **Notify / Render**: observers for the cart badge and toast
//!
//! # Example
//!
//! ```rust
//! use gabba_cache::MemoryStore;
//! use gabba_commerce::prelude::*;
//!
//! let storage = MemoryStore::new();
//! let mut store = CartStore::open(storage.clone(), StoreConfig::default());
//! store.add_item("Cap", Money::new(30000), "img2.png", None).unwrap();
//! store.add_item("Hoodie", Money::new(80000), "img1.png", Some("adults")).unwrap();
//! store.remove_item(0).unwrap();
//!
//! // A second store over the same storage sees the same cart.
//! let reopened = CartStore::open(storage, StoreConfig::default());
//! assert_eq!(reopened.lines()[0].name, "Hoodie");
//! assert_eq!(reopened.compute_totals().unwrap().total, Money::new(85000));
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod notify;
pub mod render;
pub mod search;
pub mod store;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::{LineId, LineIdGenerator};
pub use money::Money;
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::{LineId, LineIdGenerator};
    pub use crate::money::Money;
    pub use crate::store::CartStore;

    // Cart
    pub use crate::cart::{parse_quantity, Cart, CartLine, CartTotals, QuantityChange};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Search
    pub use crate::search::{matches_term, search, FilterOutcome, PriceRange, ProductFilter};

    // Checkout
    pub use crate::checkout::{CustomerInfo, OrderHandoff, OrderSummary, PaymentMethod};

    // Notifications
    pub use crate::notify::{CartObserver, LogObserver, Notification, Severity};
    pub use crate::render::{CartBadge, ToastSlot};
}
