//! Cart and cart line types.

use crate::cart::CartTotals;
use crate::error::CommerceError;
use crate::ids::{LineId, LineIdGenerator};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One distinct product in the cart, with its aggregated quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Unique line identifier.
    pub line_id: LineId,
    /// Product name; the identity key within a cart.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Image reference, not interpreted.
    pub image: String,
    /// Classification tag.
    #[serde(default)]
    pub category: String,
    /// Quantity, at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line with quantity 1.
    pub fn new(
        line_id: LineId,
        name: impl Into<String>,
        unit_price: Money,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            line_id,
            name: name.into(),
            unit_price,
            image: image.into(),
            category: category.into(),
            quantity: 1,
        }
    }

    /// `unit_price * quantity`, or `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(u64::from(self.quantity))
    }
}

/// Result of [`Cart::change_quantity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line stays, with this new quantity.
    Updated(u32),
    /// The quantity dropped to zero or below and the line was removed.
    Removed(CartLine),
}

/// An ordered list of cart lines.
///
/// Invariants: at most one line per name, every quantity is at least 1,
/// and lines keep insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored lines, restoring the invariants.
    ///
    /// Zero-quantity lines are dropped; a repeated name is folded into its
    /// first occurrence. A line whose id is already taken by an earlier line
    /// gets a new id above every stored one.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.position(&line.name) {
                Some(i) => {
                    let existing = &mut cart.lines[i];
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }

        let mut next = cart.lines.iter().map(|l| l.line_id.get()).max().unwrap_or(0);
        let mut seen = HashSet::new();
        for line in &mut cart.lines {
            if !seen.insert(line.line_id) {
                next = next.saturating_add(1);
                line.line_id = LineId::new(next);
            }
        }
        cart
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line at `index`.
    pub fn line(&self, index: usize) -> Option<&CartLine> {
        self.lines.get(index)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Position of the line named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.name == name)
    }

    /// Add one unit of a product.
    ///
    /// An existing line with the same name gets its quantity bumped;
    /// otherwise a new line with quantity 1 is appended using an id from
    /// `ids`. Returns the id of the affected line.
    pub fn add(
        &mut self,
        name: &str,
        unit_price: Money,
        image: &str,
        category: &str,
        ids: &mut LineIdGenerator,
    ) -> Result<LineId, CommerceError> {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.name == name) {
            existing.quantity = existing
                .quantity
                .checked_add(1)
                .ok_or(CommerceError::Overflow)?;
            return Ok(existing.line_id);
        }

        let line = CartLine::new(ids.next_id(), name, unit_price, image, category);
        let id = line.line_id;
        self.lines.push(line);
        Ok(id)
    }

    /// Remove the line at `index`, shifting later lines left.
    pub fn remove(&mut self, index: usize) -> Result<CartLine, CommerceError> {
        self.check_index(index)?;
        Ok(self.lines.remove(index))
    }

    /// Add `delta` to the quantity of the line at `index`.
    ///
    /// A result of zero or less removes the line.
    pub fn change_quantity(
        &mut self,
        index: usize,
        delta: i64,
    ) -> Result<QuantityChange, CommerceError> {
        self.check_index(index)?;
        let current = i64::from(self.lines[index].quantity);
        let updated = current.checked_add(delta).ok_or(CommerceError::Overflow)?;

        if updated <= 0 {
            return Ok(QuantityChange::Removed(self.lines.remove(index)));
        }

        let quantity = u32::try_from(updated).map_err(|_| CommerceError::Overflow)?;
        self.lines[index].quantity = quantity;
        Ok(QuantityChange::Updated(quantity))
    }

    /// Set the quantity of the line at `index`.
    ///
    /// A non-positive `quantity` leaves the line unchanged and returns
    /// `Ok(false)`.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> Result<bool, CommerceError> {
        self.check_index(index)?;
        if quantity <= 0 {
            return Ok(false);
        }
        let quantity = u32::try_from(quantity).map_err(|_| CommerceError::Overflow)?;
        self.lines[index].quantity = quantity;
        Ok(true)
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Compute item count, subtotal and total with a flat `shipping` fee.
    pub fn totals(&self, shipping: Money) -> Result<CartTotals, CommerceError> {
        let line_totals = self
            .lines
            .iter()
            .map(|l| l.line_total().ok_or(CommerceError::Overflow))
            .collect::<Result<Vec<_>, _>>()?;
        let subtotal = Money::try_sum(line_totals.into_iter()).ok_or(CommerceError::Overflow)?;
        let total = subtotal.try_add(&shipping).ok_or(CommerceError::Overflow)?;

        Ok(CartTotals {
            item_count: self.item_count(),
            subtotal,
            shipping,
            total,
        })
    }

    fn check_index(&self, index: usize) -> Result<(), CommerceError> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(CommerceError::LineIndexOutOfRange {
                index,
                len: self.lines.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_with(names: &[(&str, u64)]) -> (Cart, LineIdGenerator) {
        let mut ids = LineIdGenerator::new();
        let mut cart = Cart::new();
        for (name, price) in names {
            cart.add(name, Money::new(*price), "img.png", "", &mut ids).unwrap();
        }
        (cart, ids)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let (mut cart, mut ids) = cart_with(&[("Hoodie", 80000)]);
        let first = cart.lines()[0].line_id;
        let again = cart
            .add("Hoodie", Money::new(80000), "img1.png", "adults", &mut ids)
            .unwrap();

        assert_eq!(again, first);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let (cart, _) = cart_with(&[("Hoodie", 1), ("Cap", 2), ("Socks", 3)]);
        let names: Vec<_> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Hoodie", "Cap", "Socks"]);
    }

    #[test]
    fn test_new_lines_get_distinct_ids() {
        let (cart, _) = cart_with(&[("Hoodie", 1), ("Cap", 2)]);
        assert_ne!(cart.lines()[0].line_id, cart.lines()[1].line_id);
    }

    #[test]
    fn test_remove_shifts_left() {
        let (mut cart, _) = cart_with(&[("Hoodie", 1), ("Cap", 2), ("Socks", 3)]);
        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.name, "Cap");
        assert_eq!(cart.lines()[1].name, "Socks");
    }

    #[test]
    fn test_remove_out_of_range() {
        let (mut cart, _) = cart_with(&[("Cap", 30000)]);
        let err = cart.remove(1).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::LineIndexOutOfRange { index: 1, len: 1 }
        ));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_change_quantity_to_zero_removes() {
        let (mut cart, mut ids) = cart_with(&[("Cap", 30000)]);
        cart.add("Cap", Money::new(30000), "", "", &mut ids).unwrap();

        let change = cart.change_quantity(0, -2).unwrap();
        assert!(matches!(change, QuantityChange::Removed(ref l) if l.name == "Cap"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_below_zero_removes() {
        let (mut cart, _) = cart_with(&[("Cap", 30000)]);
        let change = cart.change_quantity(0, -10).unwrap();
        assert!(matches!(change, QuantityChange::Removed(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_updates_in_place() {
        let (mut cart, _) = cart_with(&[("Cap", 30000)]);
        assert_eq!(cart.change_quantity(0, 4).unwrap(), QuantityChange::Updated(5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_ignores_non_positive() {
        let (mut cart, _) = cart_with(&[("Cap", 30000)]);
        let before = cart.clone();
        assert!(!cart.set_quantity(0, 0).unwrap());
        assert!(!cart.set_quantity(0, -3).unwrap());
        assert_eq!(cart, before);

        assert!(cart.set_quantity(0, 7).unwrap());
        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn test_set_quantity_checks_index_first() {
        let (mut cart, _) = cart_with(&[("Cap", 30000)]);
        assert!(matches!(
            cart.set_quantity(3, 0),
            Err(CommerceError::LineIndexOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn test_totals() {
        let (mut cart, mut ids) = cart_with(&[("Hoodie", 80000), ("Cap", 30000)]);
        cart.add("Hoodie", Money::new(80000), "", "", &mut ids).unwrap();

        let totals = cart.totals(Money::new(5000)).unwrap();
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.subtotal, Money::new(190000));
        assert_eq!(totals.total, Money::new(195000));
    }

    #[test]
    fn test_totals_overflow() {
        let (mut cart, _) = cart_with(&[("Gold", u64::MAX)]);
        cart.set_quantity(0, 2).unwrap();
        assert!(matches!(
            cart.totals(Money::zero()),
            Err(CommerceError::Overflow)
        ));
    }

    #[test]
    fn test_from_lines_restores_invariants() {
        let line = |id, name: &str, quantity| CartLine {
            quantity,
            ..CartLine::new(LineId::new(id), name, Money::new(100), "", "")
        };
        let cart = Cart::from_lines(vec![
            line(1, "Cap", 2),
            line(2, "Ghost", 0),
            line(3, "Hoodie", 1),
            line(4, "Cap", 3),
        ]);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].name, "Cap");
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.lines()[0].line_id, LineId::new(1));
        assert_eq!(cart.lines()[1].name, "Hoodie");
    }

    #[test]
    fn test_from_lines_reissues_colliding_ids() {
        let cart = Cart::from_lines(vec![
            CartLine::new(LineId::new(4), "Cap", Money::new(100), "", ""),
            CartLine::new(LineId::new(7), "Hoodie", Money::new(100), "", ""),
            CartLine::new(LineId::new(4), "Socks", Money::new(100), "", ""),
        ]);

        let ids: Vec<LineId> = cart.lines().iter().map(|l| l.line_id).collect();
        assert_eq!(ids, vec![LineId::new(4), LineId::new(7), LineId::new(8)]);

        let mut generator = LineIdGenerator::after(ids.iter());
        assert_eq!(generator.next_id(), LineId::new(9));
    }

    #[test]
    fn test_line_category_defaults_to_empty() {
        let line: CartLine = serde_json::from_str(
            r#"{"line_id":1,"name":"Cap","unit_price":30000,"image":"img2.png","quantity":1}"#,
        )
        .unwrap();
        assert_eq!(line.category, "");
    }
}
