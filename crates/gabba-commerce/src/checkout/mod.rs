//! Checkout module.
//!
//! Contains customer details and the order summary hand-off.

mod customer;
mod order;

pub use customer::{CustomerInfo, PaymentMethod};
pub use order::{OrderHandoff, OrderSummary, WHATSAPP_BASE_URL};
