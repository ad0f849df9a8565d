//! Storefront configuration.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Default storage slot name for the cart snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "carrito";

/// Default flat shipping fee.
pub const DEFAULT_SHIPPING_COST: Money = Money::new(5000);

/// Default messaging recipient for orders.
pub const DEFAULT_WHATSAPP_RECIPIENT: &str = "573104273591";

/// Default store name shown in order messages.
pub const DEFAULT_STORE_NAME: &str = "GABBA STORE";

/// Settings shared by the cart store and the order formatter.
///
/// Every field has a default, so a partial `[store]` table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Name printed in the order header.
    pub store_name: String,
    /// Storage slot holding the cart snapshot.
    pub storage_key: String,
    /// Flat shipping fee added once per order.
    pub shipping_cost: Money,
    /// Recipient identifier for the order deep link.
    pub whatsapp_recipient: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            shipping_cost: DEFAULT_SHIPPING_COST,
            whatsapp_recipient: DEFAULT_WHATSAPP_RECIPIENT.to_string(),
        }
    }
}

impl StoreConfig {
    /// Override the shipping fee.
    pub fn with_shipping_cost(mut self, cost: Money) -> Self {
        self.shipping_cost = cost;
        self
    }

    /// Override the storage slot name.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
