//! Product catalog module.
//!
//! The static product grid the storefront filters and searches.

mod product;

pub use product::{Catalog, Product};
