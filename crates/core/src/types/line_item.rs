//! Cart line item type.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A single product entry in a cart.
///
/// The id, name, and unit price are fixed at construction; only the
/// quantity can change afterwards, through [`increase_quantity`] and
/// [`decrease_quantity`].
///
/// ## Constraints
///
/// - `quantity` is always at least 1
/// - `price` is the unit price and is taken as-is; the constructor performs
///   no sign or range validation
///
/// ## Examples
///
/// ```
/// use cartlab_core::LineItem;
///
/// let mut item = LineItem::new("sku-1", "Espresso Cup", 12.50);
/// assert_eq!(item.quantity(), 1);
///
/// item.increase_quantity();
/// assert_eq!(item.quantity(), 2);
///
/// item.decrease_quantity();
/// item.decrease_quantity();
/// // Floored at 1, never 0
/// assert_eq!(item.quantity(), 1);
/// ```
///
/// [`increase_quantity`]: LineItem::increase_quantity
/// [`decrease_quantity`]: LineItem::decrease_quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    id: ProductId,
    name: String,
    price: f64,
    quantity: u32,
}

impl LineItem {
    /// Create a line item with a quantity of 1.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    /// The product id.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    /// The product display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// The current quantity. Always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Increment the quantity. There is no upper bound.
    pub const fn increase_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Decrement the quantity, floored at 1. No-op when already 1.
    pub const fn decrease_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }
}
