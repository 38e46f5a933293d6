//! The cart aggregate.

use cartlab_core::{LineItem, ProductId};

use crate::error::CheckoutError;
use crate::gateway::{CheckoutReceipt, PaymentGateway};

/// An ordered collection of line items with derived totals.
///
/// Insertion order is preserved and duplicate product ids are allowed; the
/// cart performs no deduplication or validation of the items it is handed.
/// Counts and totals are computed on read, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item to the end of the cart.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove every item whose id matches.
    ///
    /// Filter semantics: all matches go and the survivors keep their
    /// relative order. Removing an id that is not present is a no-op.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|item| item.id() != id);
    }

    /// Number of line items currently in the cart.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of unit prices across all items. Quantities are not factored in.
    ///
    /// Returns 0.0 for an empty cart.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(LineItem::price).sum()
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Run the simulated checkout against `gateway`.
    ///
    /// The subtotal and item count are captured at invocation, before the
    /// gateway's simulated latency. The cart itself is left untouched
    /// whether the payment settles or is declined; overlapping checkouts
    /// are allowed and each prices its own snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::PaymentDeclined`] when the gateway's
    /// outcome draw fails.
    pub async fn checkout(
        &self,
        gateway: &PaymentGateway,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        gateway.process(self.total_amount(), self.item_count()).await
    }
}
