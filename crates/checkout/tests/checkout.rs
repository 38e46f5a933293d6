//! Checkout contract tests.
//!
//! Run under tokio's paused clock so the simulated latency is observed
//! deterministically, with scripted outcome sources in place of the RNG.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use cartlab_checkout::{Cart, CheckoutConfig, CheckoutError, OutcomeSource, PaymentGateway};
use cartlab_core::{LineItem, ProductId};

const EPS: f64 = 1e-9;

/// Outcome source that always returns the same draw.
struct FixedOutcome(f64);

impl OutcomeSource for FixedOutcome {
    fn draw(&self) -> f64 {
        self.0
    }
}

/// Outcome source that replays a script of draws, one per checkout.
struct ScriptedOutcome {
    draws: Vec<f64>,
    next: AtomicUsize,
}

impl ScriptedOutcome {
    fn new(draws: Vec<f64>) -> Self {
        Self {
            draws,
            next: AtomicUsize::new(0),
        }
    }
}

impl OutcomeSource for ScriptedOutcome {
    fn draw(&self) -> f64 {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.draws.get(i).copied().unwrap_or(0.0)
    }
}

fn always_settles() -> PaymentGateway {
    PaymentGateway::with_outcome_source(CheckoutConfig::default(), FixedOutcome(0.0))
}

fn always_declines() -> PaymentGateway {
    PaymentGateway::with_outcome_source(CheckoutConfig::default(), FixedOutcome(0.99))
}

fn one_item_cart() -> Cart {
    let mut cart = Cart::new();
    cart.add_item(LineItem::new("a", "Alpha", 20.00));
    cart
}

#[tokio::test(start_paused = true)]
async fn single_item_success_payload() {
    let cart = one_item_cart();

    let receipt = cart.checkout(&always_settles()).await.unwrap();

    assert!((receipt.tax_amount - 2.00).abs() < EPS);
    assert!((receipt.shipping_amount - 5.00).abs() < EPS);
    assert!((receipt.total_amount - 27.00).abs() < EPS);
}

#[tokio::test(start_paused = true)]
async fn empty_cart_charges_nothing() {
    let cart = Cart::new();

    let receipt = cart.checkout(&always_settles()).await.unwrap();

    assert!(receipt.tax_amount.abs() < EPS);
    assert!(receipt.shipping_amount.abs() < EPS);
    assert!(receipt.total_amount.abs() < EPS);
}

#[tokio::test(start_paused = true)]
async fn tax_and_shipping_follow_the_snapshot() {
    let mut cart = Cart::new();
    cart.add_item(LineItem::new("a", "Alpha", 10.00));
    cart.add_item(LineItem::new("b", "Beta", 30.00));

    let receipt = cart.checkout(&always_settles()).await.unwrap();

    assert!((receipt.tax_amount - 4.00).abs() < EPS);
    assert!((receipt.shipping_amount - 5.00).abs() < EPS);
    assert!((receipt.total_amount - 49.00).abs() < EPS);
}

#[tokio::test(start_paused = true)]
async fn decline_carries_the_fixed_message() {
    let cart = one_item_cart();

    let err = cart.checkout(&always_declines()).await.unwrap_err();

    assert_eq!(err, CheckoutError::PaymentDeclined);
    assert_eq!(
        err.to_string(),
        "Failed to process the payment. Please try again."
    );
}

#[tokio::test(start_paused = true)]
async fn settles_only_after_the_configured_delay() {
    let cart = one_item_cart();
    let gateway = always_settles();

    let checkout = cart.checkout(&gateway);
    tokio::pin!(checkout);

    // One millisecond short of the latency the checkout must still be
    // pending; the paused clock advances deterministically.
    tokio::select! {
        _ = &mut checkout => panic!("checkout settled before the simulated latency"),
        () = tokio::time::sleep(Duration::from_millis(1999)) => {}
    }

    let start = tokio::time::Instant::now();
    let receipt = checkout.await.unwrap();
    assert!((receipt.total_amount - 27.00).abs() < EPS);
    assert_eq!(start.elapsed(), Duration::from_millis(1));
}

#[tokio::test(start_paused = true)]
async fn full_latency_elapses_under_a_fast_config() {
    let config = CheckoutConfig {
        checkout_delay: Duration::from_millis(250),
        ..CheckoutConfig::default()
    };
    let gateway = PaymentGateway::with_outcome_source(config, FixedOutcome(0.0));
    let cart = one_item_cart();

    let start = tokio::time::Instant::now();
    cart.checkout(&gateway).await.unwrap();

    assert_eq!(start.elapsed(), Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn cart_is_unchanged_by_checkout() {
    let mut cart = Cart::new();
    cart.add_item(LineItem::new("a", "Alpha", 20.00));
    cart.add_item(LineItem::new("b", "Beta", 7.00));
    let before = cart.clone();

    cart.checkout(&always_settles()).await.unwrap();
    assert_eq!(cart, before);

    cart.checkout(&always_declines()).await.unwrap_err();
    assert_eq!(cart, before);
}

#[tokio::test(start_paused = true)]
async fn draw_at_the_success_rate_boundary_declines() {
    // Settle requires draw < success_rate; a draw equal to it declines.
    let gateway =
        PaymentGateway::with_outcome_source(CheckoutConfig::default(), FixedOutcome(0.8));
    let cart = one_item_cart();

    assert_eq!(
        cart.checkout(&gateway).await.unwrap_err(),
        CheckoutError::PaymentDeclined
    );
}

#[tokio::test(start_paused = true)]
async fn each_checkout_draws_a_fresh_outcome() {
    let gateway = PaymentGateway::with_outcome_source(
        CheckoutConfig::default(),
        ScriptedOutcome::new(vec![0.0, 0.9, 0.0]),
    );
    let cart = one_item_cart();

    assert!(cart.checkout(&gateway).await.is_ok());
    assert!(cart.checkout(&gateway).await.is_err());
    assert!(cart.checkout(&gateway).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn overlapping_checkouts_settle_independently() {
    let cart = one_item_cart();
    let settling = always_settles();
    let declining = always_declines();

    let (first, second) = tokio::join!(cart.checkout(&settling), cart.checkout(&declining));

    let receipt = first.unwrap();
    assert!((receipt.total_amount - 27.00).abs() < EPS);
    assert_eq!(second.unwrap_err(), CheckoutError::PaymentDeclined);

    // Both priced the same snapshot and neither touched the cart
    assert_eq!(cart.item_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn removing_items_empties_the_next_snapshot() {
    let mut cart = Cart::new();
    cart.add_item(LineItem::new("a", "Alpha", 20.00));
    cart.remove_item(&ProductId::from("a"));

    let receipt = cart.checkout(&always_settles()).await.unwrap();

    assert!(receipt.shipping_amount.abs() < EPS);
    assert!(receipt.total_amount.abs() < EPS);
}
