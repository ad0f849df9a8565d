//! Filter and search results.

use crate::catalog::Product;
use serde::Serialize;

/// Products left visible after a filter or search, in catalog order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    pub visible: Vec<&'a Product>,
    /// Number of products considered.
    pub total: usize,
}

impl<'a> FilterOutcome<'a> {
    pub fn new(visible: Vec<&'a Product>, total: usize) -> Self {
        Self { visible, total }
    }

    /// Nothing matched; the storefront shows a "no products found" message.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Number of products the filter hid.
    pub fn hidden_count(&self) -> usize {
        self.total.saturating_sub(self.visible.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.visible.iter().copied()
    }
}
