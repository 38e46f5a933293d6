//! Checkout configuration.
//!
//! # Environment Variables
//!
//! All optional; defaults are the simulation constants.
//!
//! - `CARTLAB_TAX_RATE` - tax rate applied to the subtotal (default: 0.10)
//! - `CARTLAB_SHIPPING_FEE` - flat shipping fee for non-empty carts
//!   (default: 5.00)
//! - `CARTLAB_CHECKOUT_DELAY_MS` - simulated payment latency in
//!   milliseconds (default: 2000)
//! - `CARTLAB_SUCCESS_RATE` - probability a checkout settles, in `[0, 1]`
//!   (default: 0.8)

use std::time::Duration;

use thiserror::Error;

const DEFAULT_TAX_RATE: f64 = 0.10;
const DEFAULT_SHIPPING_FEE: f64 = 5.00;
const DEFAULT_CHECKOUT_DELAY_MS: u64 = 2000;
const DEFAULT_SUCCESS_RATE: f64 = 0.8;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Out-of-range value for {0}: {1}")]
    OutOfRange(String, String),
}

/// Checkout simulation configuration.
///
/// [`CheckoutConfig::default`] yields the stock simulation: 10% tax, a
/// flat $5.00 shipping fee on non-empty carts, two seconds of latency,
/// and an 80% settle rate.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Tax rate applied to the subtotal.
    pub tax_rate: f64,
    /// Flat shipping fee charged when the cart is non-empty.
    pub shipping_fee: f64,
    /// Simulated payment latency.
    pub checkout_delay: Duration,
    /// Probability that a checkout settles, in `[0, 1]`.
    pub success_rate: f64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            shipping_fee: DEFAULT_SHIPPING_FEE,
            checkout_delay: Duration::from_millis(DEFAULT_CHECKOUT_DELAY_MS),
            success_rate: DEFAULT_SUCCESS_RATE,
        }
    }
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse or is out
    /// of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from a key lookup function.
    ///
    /// Split out from [`from_env`](Self::from_env) so validation is
    /// testable without touching process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let tax_rate = parse_f64("CARTLAB_TAX_RATE", lookup("CARTLAB_TAX_RATE"), DEFAULT_TAX_RATE)?;
        require_non_negative("CARTLAB_TAX_RATE", tax_rate)?;

        let shipping_fee = parse_f64(
            "CARTLAB_SHIPPING_FEE",
            lookup("CARTLAB_SHIPPING_FEE"),
            DEFAULT_SHIPPING_FEE,
        )?;
        require_non_negative("CARTLAB_SHIPPING_FEE", shipping_fee)?;

        let delay_ms = parse_u64(
            "CARTLAB_CHECKOUT_DELAY_MS",
            lookup("CARTLAB_CHECKOUT_DELAY_MS"),
            DEFAULT_CHECKOUT_DELAY_MS,
        )?;

        let success_rate = parse_f64(
            "CARTLAB_SUCCESS_RATE",
            lookup("CARTLAB_SUCCESS_RATE"),
            DEFAULT_SUCCESS_RATE,
        )?;
        require_unit_interval("CARTLAB_SUCCESS_RATE", success_rate)?;

        Ok(Self {
            tax_rate,
            shipping_fee,
            checkout_delay: Duration::from_millis(delay_ms),
            success_rate,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable as `f64`, falling back to a default.
fn parse_f64(key: &str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    raw.map_or(Ok(default), |value| {
        value
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse an optional variable as `u64`, falling back to a default.
fn parse_u64(key: &str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    raw.map_or(Ok(default), |value| {
        value
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Reject negative rates and fees.
fn require_non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    if value < 0.0 {
        return Err(ConfigError::OutOfRange(
            key.to_string(),
            format!("must be non-negative (got {value})"),
        ));
    }
    Ok(())
}

/// Reject probabilities outside `[0, 1]`.
fn require_unit_interval(key: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfRange(
            key.to_string(),
            format!("must be within [0, 1] (got {value})"),
        ));
    }
    Ok(())
}
