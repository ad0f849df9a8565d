//! Shopping cart module.
//!
//! Contains the cart, its lines, derived totals and quantity parsing.

mod cart;
mod pricing;
mod quantity;

pub use cart::{Cart, CartLine, QuantityChange};
pub use pricing::CartTotals;
pub use quantity::parse_quantity;
