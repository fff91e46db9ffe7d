//! The cart store: authoritative cart state for the current session.
//!
//! # Architecture
//!
//! One `CartStore` is constructed at application start and handed to every
//! surface that reads or writes the cart. Execution is single-threaded and
//! event-driven; each mutation runs to completion before the next event, so
//! no locking discipline is needed. Hosts that fan the store out to several
//! views wrap it in `Rc<RefCell<_>>` themselves.
//!
//! Mutations are total functions: invalid input (unknown id, non-positive
//! quantity) degrades to a no-op or a removal, never an error. Every
//! mutation persists the full line list to the configured storage backend
//! and then notifies subscribed observers with the post-mutation lines.
//!
//! Aggregates (`total_items`, `total_price`) are recomputed fresh on every
//! read; the line list is the only state.

pub mod storage;

use rust_decimal::Decimal;
use tracing::warn;

use clementine_core::{CartLine, Product, ProductId};

use storage::CartStorage;

/// Handle identifying one observer subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&[CartLine])>;

/// Authoritative, persisted cart state for one client session.
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Box<dyn CartStorage>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create the store from persisted state.
    ///
    /// A missing record starts an empty cart. A record that cannot be read
    /// or parsed is discarded with a warning and the cart starts empty;
    /// corruption must never take the host down.
    #[must_use]
    pub fn load(storage: Box<dyn CartStorage>) -> Self {
        let lines = match storage.load() {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<CartLine>>(&bytes) {
                Ok(lines) => lines,
                Err(e) => {
                    warn!(error = %e, "Discarding malformed cart record, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read cart record, starting empty");
                Vec::new()
            }
        };

        Self {
            lines,
            storage,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of a product to the cart.
    ///
    /// An existing line's quantity increments by 1, silently capped at the
    /// product's stock. A new line starts at quantity 1 and captures the
    /// product's current price, title, thumbnail, and stock as the line's
    /// stock ceiling.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == product.id) {
            line.quantity = (line.quantity + 1).min(product.stock);
        } else {
            self.lines.push(CartLine::from_product(product));
        }
        self.after_mutation();
    }

    /// Remove a line from the cart. No-op if the id is not present.
    pub fn remove_item(&mut self, id: ProductId) {
        self.lines.retain(|line| line.id != id);
        self.after_mutation();
    }

    /// Set a line's quantity, clamped to its stock ceiling.
    ///
    /// A non-positive quantity removes the line, equivalent to
    /// [`remove_item`](Self::remove_item). No-op if the id is not present.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            let requested = u32::try_from(quantity).unwrap_or(u32::MAX);
            line.quantity = requested.min(line.stock);
        }
        self.after_mutation();
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.after_mutation();
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Cart subtotal: sum of unit price times quantity over all lines.
    ///
    /// Tax and shipping are caller concerns; see [`crate::checkout`].
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register an observer invoked after every completed mutation with the
    /// post-mutation line list.
    pub fn subscribe(&mut self, observer: impl FnMut(&[CartLine]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. No-op for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(existing, _)| *existing != id);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Persist the line list and notify observers.
    ///
    /// A storage failure is logged but never surfaced: mutations cannot fail.
    fn after_mutation(&mut self) {
        match serde_json::to_vec(&self.lines) {
            Ok(bytes) => {
                if let Err(e) = self.storage.store(&bytes) {
                    warn!(error = %e, "Failed to persist cart record");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize cart record"),
        }

        for (_, observer) in &mut self.observers {
            observer(&self.lines);
        }
    }
}
