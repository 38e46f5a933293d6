//! Checkout error types.

use thiserror::Error;

/// Errors that can occur while settling a checkout.
///
/// The cart's own operations (add, remove, count, subtotal) are total and
/// cannot fail; only the payment step has an error path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    /// The simulated payment provider declined the charge.
    ///
    /// Not retried internally; re-invoking checkout is the caller's call.
    #[error("Failed to process the payment. Please try again.")]
    PaymentDeclined,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declined_message_is_stable() {
        // The presentation layer shows this text verbatim.
        assert_eq!(
            CheckoutError::PaymentDeclined.to_string(),
            "Failed to process the payment. Please try again."
        );
    }
}
