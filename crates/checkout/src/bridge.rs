//! Presentation-layer bridge.
//!
//! The presentation layer (a terminal, a web page, a test harness) is an
//! external collaborator: it feeds [`CartEvent`]s in and receives rendering
//! callbacks through [`CartPresenter`]. [`CartController`] owns the cart
//! and the gateway and does the wiring.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cartlab_core::{LineItem, ProductId, format_currency};

use crate::cart::Cart;
use crate::gateway::PaymentGateway;

/// Input events from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    /// A new item was submitted; the price arrives unparsed.
    SubmitItem {
        id: String,
        name: String,
        price: String,
    },
    /// Removal requested for every line with this id.
    RemoveItem { id: String },
    /// The user asked to check out.
    CheckoutRequested,
}

/// Rendering callbacks implemented by the presentation layer.
pub trait CartPresenter {
    /// Render the current item count and subtotal.
    fn render_summary(&self, item_count: usize, subtotal: f64);

    /// Show or hide the busy indicator around a checkout.
    fn set_busy(&self, busy: bool);

    /// Show a success message.
    fn show_success(&self, message: &str);

    /// Show an error message.
    fn show_error(&self, message: &str);
}

/// Errors produced while translating an event into a cart operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartEventError {
    /// The submitted price did not parse as a number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}

/// Glue between the presentation layer and the cart engine.
///
/// Numeric parsing of the submitted price is the only validation performed
/// here; ids and names are accepted as-is.
pub struct CartController<P> {
    cart: Cart,
    gateway: PaymentGateway,
    presenter: P,
}

impl<P: CartPresenter> CartController<P> {
    /// Create a controller with an empty cart.
    pub const fn new(gateway: PaymentGateway, presenter: P) -> Self {
        Self {
            cart: Cart::new(),
            gateway,
            presenter,
        }
    }

    /// Get a reference to the underlying cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Dispatch one presentation event.
    pub async fn handle(&mut self, event: CartEvent) {
        match event {
            CartEvent::SubmitItem { id, name, price } => self.submit_item(id, name, &price),
            CartEvent::RemoveItem { id } => self.remove_item(&id),
            CartEvent::CheckoutRequested => self.checkout().await,
        }
    }

    fn submit_item(&mut self, id: String, name: String, price: &str) {
        match price.trim().parse::<f64>() {
            Ok(price) => {
                self.cart.add_item(LineItem::new(id, name, price));
                self.render_summary();
            }
            Err(_) => {
                let err = CartEventError::InvalidPrice(price.to_owned());
                tracing::warn!(%err, "rejected item submission");
                self.presenter.show_error(&err.to_string());
            }
        }
    }

    fn remove_item(&mut self, id: &str) {
        self.cart.remove_item(&ProductId::from(id));
        self.render_summary();
    }

    async fn checkout(&mut self) {
        self.presenter.set_busy(true);

        match self.cart.checkout(&self.gateway).await {
            Ok(receipt) => {
                self.presenter.show_success(&format!(
                    "Payment successful. Total amount: {}",
                    format_currency(receipt.total_amount)
                ));
            }
            Err(err) => self.presenter.show_error(&err.to_string()),
        }

        self.presenter.set_busy(false);
    }

    fn render_summary(&self) {
        self.presenter
            .render_summary(self.cart.item_count(), self.cart.total_amount());
    }
}
