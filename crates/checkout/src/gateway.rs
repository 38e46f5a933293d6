//! Simulated payment gateway.
//!
//! Models a payment provider as fixed latency followed by a single random
//! settle-or-decline outcome. The randomness sits behind [`OutcomeSource`]
//! so tests can script it.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tracing::instrument;

use crate::config::CheckoutConfig;
use crate::error::CheckoutError;

/// Source of the outcome draw used to settle a payment.
///
/// One draw is made per checkout invocation.
pub trait OutcomeSource: Send + Sync {
    /// A uniform draw in `[0, 1)`.
    fn draw(&self) -> f64;
}

/// Production outcome source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl OutcomeSource for ThreadRngSource {
    fn draw(&self) -> f64 {
        rand::rng().random()
    }
}

/// A settled payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckoutReceipt {
    /// Grand total charged: subtotal + tax + shipping.
    pub total_amount: f64,
    /// Tax portion of the total.
    pub tax_amount: f64,
    /// Shipping portion of the total.
    pub shipping_amount: f64,
}

/// Simulated payment gateway.
///
/// Cheaply cloneable via `Arc`; clones share the same configuration and
/// outcome source.
#[derive(Clone)]
pub struct PaymentGateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    config: CheckoutConfig,
    outcome: Box<dyn OutcomeSource>,
}

impl PaymentGateway {
    /// Create a gateway using the thread-local RNG for outcomes.
    #[must_use]
    pub fn new(config: CheckoutConfig) -> Self {
        Self::with_outcome_source(config, ThreadRngSource)
    }

    /// Create a gateway with an explicit outcome source.
    pub fn with_outcome_source(
        config: CheckoutConfig,
        outcome: impl OutcomeSource + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                config,
                outcome: Box::new(outcome),
            }),
        }
    }

    /// Get a reference to the gateway configuration.
    #[must_use]
    pub fn config(&self) -> &CheckoutConfig {
        &self.inner.config
    }

    /// Attempt to charge for a cart snapshot.
    ///
    /// Prices the snapshot (tax on the subtotal, flat shipping unless the
    /// cart was empty), suspends for the configured latency, then draws one
    /// fresh outcome: a draw below the configured success rate settles the
    /// payment, anything else declines it. The draw happens once per call;
    /// retrying is the caller's decision.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::PaymentDeclined`] when the draw fails.
    #[instrument(skip(self))]
    pub async fn process(
        &self,
        subtotal: f64,
        item_count: usize,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        let config = &self.inner.config;

        let tax = subtotal * config.tax_rate;
        let shipping = if item_count == 0 {
            0.0
        } else {
            config.shipping_fee
        };

        tokio::time::sleep(config.checkout_delay).await;

        if self.inner.outcome.draw() < config.success_rate {
            let receipt = CheckoutReceipt {
                total_amount: subtotal + tax + shipping,
                tax_amount: tax,
                shipping_amount: shipping,
            };
            tracing::info!(total = receipt.total_amount, "payment settled");
            Ok(receipt)
        } else {
            tracing::warn!("payment declined");
            Err(CheckoutError::PaymentDeclined)
        }
    }
}
