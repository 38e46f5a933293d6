//! Cartlab Checkout - cart engine and payment simulation.
//!
//! This crate holds the behavioral half of Cartlab:
//!
//! - [`Cart`] - ordered line items with derived totals and an async
//!   checkout operation
//! - [`PaymentGateway`] - the simulated payment provider: fixed latency,
//!   then a random settle-or-decline outcome
//! - [`bridge`] - the port the presentation layer talks through
//!   ([`CartEvent`] in, [`CartPresenter`] callbacks out)
//!
//! The random outcome is drawn through the [`OutcomeSource`] seam so tests
//! can make checkout deterministic.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bridge;
pub mod cart;
pub mod config;
pub mod error;
pub mod gateway;

pub use bridge::{CartController, CartEvent, CartEventError, CartPresenter};
pub use cart::Cart;
pub use config::{CheckoutConfig, ConfigError};
pub use error::CheckoutError;
pub use gateway::{CheckoutReceipt, OutcomeSource, PaymentGateway, ThreadRngSource};
