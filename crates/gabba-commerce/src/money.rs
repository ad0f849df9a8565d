//! Money type for representing monetary values.
//!
//! The storefront sells in Colombian pesos with no minor unit, so an amount
//! is a plain count of whole pesos. All arithmetic is checked; callers turn
//! `None` into [`CommerceError::Overflow`](crate::CommerceError::Overflow).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative amount of whole currency units.
///
/// Serializes as a bare number, so a persisted line reads
/// `"unit_price": 80000`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    amount: u64,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: u64) -> Self {
        Self { amount }
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// The amount in whole units.
    pub const fn amount(&self) -> u64 {
        self.amount
    }

    /// Try to add another Money value.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount.checked_add(other.amount).map(Money::new)
    }

    /// Try to multiply by a quantity.
    pub fn try_multiply(&self, factor: u64) -> Option<Money> {
        self.amount.checked_mul(factor).map(Money::new)
    }

    /// Sum an iterator of Money values, returning `None` on overflow.
    pub fn try_sum(mut iter: impl Iterator<Item = Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(&m))
    }

    /// Format in the storefront's locale: `$ 160.000`.
    pub fn display(&self) -> String {
        format!("$ {}", group_thousands(self.amount))
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Money::new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Group digits in threes with `.` separators (es-CO style).
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
