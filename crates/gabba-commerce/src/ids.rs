//! Cart line identifiers.
//!
//! Ids come from a monotonic counter owned by the cart store rather than the
//! clock, so two lines created in the same instant still get distinct ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a cart line, stable for the line's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u64);

impl LineId {
    /// Create an id from its raw value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LineId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Monotonic source of [`LineId`]s.
#[derive(Debug, Clone)]
pub struct LineIdGenerator {
    next: u64,
}

impl LineIdGenerator {
    /// Start at id 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Start past every id in `existing`, so none of them is handed out again.
    pub fn after<'a>(existing: impl IntoIterator<Item = &'a LineId>) -> Self {
        let mut generator = Self::new();
        for id in existing {
            generator.observe(*id);
        }
        generator
    }

    /// Make sure `id` is never generated.
    pub fn observe(&mut self, id: LineId) {
        if id.0 >= self.next {
            self.next = id.0.saturating_add(1);
        }
    }

    /// Never hand out anything below `next`.
    pub fn resume_at(&mut self, next: u64) {
        self.next = self.next.max(next);
    }

    /// The id the next call to [`next_id`](Self::next_id) returns.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Hand out the next id.
    pub fn next_id(&mut self) -> LineId {
        let id = LineId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for LineIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
