//! The cart store: authoritative cart state with durable persistence.
//!
//! Every mutation re-persists the full line list to a single storage slot
//! and then informs the registered observers. Storage failures are logged
//! and do not fail the mutation; the in-memory cart stays authoritative.

use chrono::NaiveDateTime;
use gabba_cache::{Cache, KeyValueStore};

use crate::cart::{parse_quantity, Cart, CartLine, CartTotals, QuantityChange};
use crate::checkout::{CustomerInfo, OrderSummary};
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::{LineId, LineIdGenerator};
use crate::money::Money;
use crate::notify::{CartObserver, Notification};

/// Message shown after a product is added.
pub const ADDED_MESSAGE: &str = "¡Producto agregado al carrito!";

/// Message shown when checkout is attempted with blank required fields.
pub const MISSING_FIELDS_MESSAGE: &str = "Por favor completa todos los campos requeridos";

/// Owns the cart, its storage slot and its observers.
///
/// # Example
///
/// ```rust
/// use gabba_cache::MemoryStore;
/// use gabba_commerce::{CartStore, Money, StoreConfig};
///
/// let mut store = CartStore::open(MemoryStore::new(), StoreConfig::default());
/// store.add_item("Hoodie", Money::new(80000), "img1.png", Some("adults")).unwrap();
/// store.add_item("Hoodie", Money::new(80000), "img1.png", Some("adults")).unwrap();
///
/// let totals = store.compute_totals().unwrap();
/// assert_eq!(totals.item_count, 2);
/// assert_eq!(totals.total, Money::new(165000));
/// ```
pub struct CartStore<S: KeyValueStore> {
    cart: Cart,
    cache: Cache<S>,
    config: StoreConfig,
    ids: LineIdGenerator,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the store, restoring any cart already persisted in `storage`.
    pub fn open(storage: S, config: StoreConfig) -> Self {
        let cache = Cache::new(storage);
        let cart = Self::restore(&cache, &config.storage_key);
        let mut ids = LineIdGenerator::after(cart.lines().iter().map(|l| &l.line_id));
        if let Some(next) = Self::restore_sequence(&cache, &config.storage_key) {
            ids.resume_at(next);
        }

        tracing::debug!(
            key = %config.storage_key,
            lines = cart.len(),
            "cart store opened"
        );

        Self {
            cart,
            cache,
            config,
            ids,
            observers: Vec::new(),
        }
    }

    /// Register an observer. It is told the current count right away.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        let mut observer = Box::new(observer);
        observer.on_count_changed(self.cart.item_count());
        self.observers.push(observer);
    }

    /// The store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The underlying storage backend.
    pub fn storage(&self) -> &S {
        self.cache.store()
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Line at `index`.
    pub fn line(&self, index: usize) -> Option<&CartLine> {
        self.cart.line(index)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of all line quantities.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Add one unit of a product.
    ///
    /// A line with the same `name` gets its quantity bumped by one;
    /// otherwise a new line is appended. `unit_price` is taken as given.
    pub fn add_item(
        &mut self,
        name: &str,
        unit_price: Money,
        image: &str,
        category: Option<&str>,
    ) -> Result<LineId, CommerceError> {
        let id = self.cart.add(
            name,
            unit_price,
            image,
            category.unwrap_or_default(),
            &mut self.ids,
        )?;

        tracing::debug!(line_id = %id, name, "item added");
        tracing::info!(
            target: "gabba::analytics",
            event = "add_to_cart",
            name,
            price = unit_price.amount(),
            "analytics event"
        );

        self.persist_logged();
        self.notify_count();
        self.notify(Notification::success(ADDED_MESSAGE));
        Ok(id)
    }

    /// Remove the line at `index`.
    ///
    /// Later lines shift left. An out-of-range index is an error and
    /// changes nothing.
    pub fn remove_item(&mut self, index: usize) -> Result<CartLine, CommerceError> {
        let removed = self.cart.remove(index)?;
        self.after_removal(&removed);
        Ok(removed)
    }

    /// Add `delta` to the quantity of the line at `index`.
    ///
    /// When the result is zero or less the line is removed, exactly as
    /// [`remove_item`](Self::remove_item) would.
    pub fn change_quantity(
        &mut self,
        index: usize,
        delta: i64,
    ) -> Result<QuantityChange, CommerceError> {
        let change = self.cart.change_quantity(index, delta)?;
        match &change {
            QuantityChange::Removed(line) => self.after_removal(line),
            QuantityChange::Updated(quantity) => {
                tracing::debug!(index, quantity, "quantity changed");
                self.persist_logged();
                self.notify_count();
            }
        }
        Ok(change)
    }

    /// Set the quantity of the line at `index`.
    ///
    /// A non-positive quantity is ignored: the line, the storage slot and
    /// the observers are left alone and `Ok(false)` is returned.
    pub fn set_quantity(&mut self, index: usize, new_quantity: i64) -> Result<bool, CommerceError> {
        let applied = self.cart.set_quantity(index, new_quantity)?;
        if applied {
            tracing::debug!(index, quantity = new_quantity, "quantity set");
            self.persist_logged();
            self.notify_count();
        } else {
            tracing::debug!(index, quantity = new_quantity, "ignored non-positive quantity");
        }
        Ok(applied)
    }

    /// Parse free-text `input` and apply it as [`set_quantity`](Self::set_quantity).
    ///
    /// Text without a leading integer is ignored like a non-positive value.
    pub fn set_quantity_input(&mut self, index: usize, input: &str) -> Result<bool, CommerceError> {
        match parse_quantity(input) {
            Some(quantity) => self.set_quantity(index, quantity),
            None => {
                if self.cart.line(index).is_none() {
                    return Err(CommerceError::LineIndexOutOfRange {
                        index,
                        len: self.cart.len(),
                    });
                }
                tracing::debug!(index, input, "ignored unparsable quantity");
                Ok(false)
            }
        }
    }

    /// Empty the cart and delete the storage slot itself.
    pub fn clear(&mut self) {
        self.cart.clear();
        if let Err(e) = self.cache.delete(&self.config.storage_key) {
            tracing::error!(
                key = %self.config.storage_key,
                error = %e,
                "failed to delete cart snapshot"
            );
        }
        tracing::debug!("cart cleared");
        self.notify_count();
    }

    /// Item count, subtotal, shipping and total. No side effects.
    pub fn compute_totals(&self) -> Result<CartTotals, CommerceError> {
        self.cart.totals(self.config.shipping_cost)
    }

    /// Write the full line list to the storage slot.
    ///
    /// The id sequence goes to a sibling slot (`<key>.seq`) that survives
    /// [`clear`](Self::clear), so ids of removed lines are never handed out
    /// again. Mutations call this on their own; it is public for callers
    /// that want to force a flush and see the error.
    pub fn persist(&self) -> Result<(), CommerceError> {
        self.cache.set(&self.config.storage_key, &self.cart)?;
        self.cache
            .set(&sequence_key(&self.config.storage_key), &self.ids.peek())?;
        Ok(())
    }

    /// Compose the order message for the current cart.
    ///
    /// Blank required customer fields produce an error notification and
    /// [`CommerceError::MissingField`]. The cart is not cleared.
    pub fn checkout(
        &mut self,
        customer: &CustomerInfo,
        placed_at: NaiveDateTime,
    ) -> Result<OrderSummary, CommerceError> {
        if let Err(e) = customer.validate() {
            self.notify(Notification::error(MISSING_FIELDS_MESSAGE));
            return Err(e);
        }
        let totals = self.compute_totals()?;
        OrderSummary::compose(
            self.cart.lines(),
            &totals,
            customer,
            &self.config,
            placed_at,
        )
    }

    fn restore(cache: &Cache<S>, key: &str) -> Cart {
        match cache.get::<Vec<CartLine>>(key) {
            Ok(Some(lines)) => {
                let stored = lines.len();
                let cart = Cart::from_lines(lines);
                if cart.len() != stored {
                    tracing::warn!(
                        key,
                        stored,
                        kept = cart.len(),
                        "normalised persisted cart lines"
                    );
                }
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable cart snapshot");
                Cart::new()
            }
        }
    }

    fn restore_sequence(cache: &Cache<S>, key: &str) -> Option<u64> {
        match cache.get::<u64>(&sequence_key(key)) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable line id sequence");
                None
            }
        }
    }

    fn after_removal(&mut self, removed: &CartLine) {
        tracing::debug!(line_id = %removed.line_id, name = %removed.name, "item removed");
        self.persist_logged();
        self.notify_count();
        self.notify(Notification::info(format!(
            "{} eliminado del carrito",
            removed.name
        )));
    }

    fn persist_logged(&self) {
        if let Err(e) = self.persist() {
            tracing::error!(
                key = %self.config.storage_key,
                error = %e,
                "failed to persist cart"
            );
        }
    }

    fn notify_count(&mut self) {
        let count = self.cart.item_count();
        for observer in &mut self.observers {
            observer.on_count_changed(count);
        }
    }

    fn notify(&mut self, notification: Notification) {
        for observer in &mut self.observers {
            observer.on_notification(&notification);
        }
    }
}

fn sequence_key(key: &str) -> String {
    format!("{key}.seq")
}

impl<S: KeyValueStore> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("storage", self.cache.store())
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}
