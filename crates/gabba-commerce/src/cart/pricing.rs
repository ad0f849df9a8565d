//! Cart totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Aggregates derived from the cart lines. Never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line quantities.
    pub item_count: u64,
    /// Sum of `unit_price * quantity` over all lines.
    pub subtotal: Money,
    /// Flat shipping fee.
    pub shipping: Money,
    /// `subtotal + shipping`.
    pub total: Money,
}

impl CartTotals {
    /// Check if there is nothing to pay for besides shipping.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_amounts_as_numbers() {
        let totals = CartTotals {
            item_count: 2,
            subtotal: Money::new(160000),
            shipping: Money::new(5000),
            total: Money::new(165000),
        };
        let json = serde_json::to_value(totals).unwrap();
        assert_eq!(json["total"], 165000);
        assert!(!totals.is_empty());
    }
}
