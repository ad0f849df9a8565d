//! Search module.
//!
//! Attribute filters and free-text search over the catalog.

mod filter;
mod results;

pub use filter::{matches_term, search, PriceRange, ProductFilter};
pub use results::FilterOutcome;
