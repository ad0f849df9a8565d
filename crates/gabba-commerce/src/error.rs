//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Index does not point at a cart line.
    #[error("Cart line index {index} out of range (cart has {len} lines)")]
    LineIndexOutOfRange { index: usize, len: usize },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// A required customer field is blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Order requested for an empty cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Price range filter could not be parsed.
    #[error("Invalid price range: {0:?}")]
    InvalidPriceRange(String),

    /// Unknown payment method name.
    #[error("Unknown payment method: {0:?}")]
    InvalidPaymentMethod(String),

    /// Catalog document could not be parsed.
    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    /// Storage slot error.
    #[error("Storage error: {0}")]
    Storage(#[from] gabba_cache::CacheError),

    /// Hand-off of a finished order failed.
    #[error("Order hand-off failed: {0}")]
    HandoffFailed(String),
}
