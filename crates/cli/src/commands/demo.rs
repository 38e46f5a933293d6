//! Scripted demo checkout.

use cartlab_checkout::{CartController, CartEvent, PaymentGateway};

use super::TerminalPresenter;

/// Drive a fixed add/remove/checkout sequence through the controller.
///
/// The checkout outcome is random, so repeated runs show both the success
/// and the decline paths.
pub async fn run(gateway: PaymentGateway) {
    let mut controller = CartController::new(gateway, TerminalPresenter);

    let script = [
        CartEvent::SubmitItem {
            id: "sku-1".to_owned(),
            name: "Espresso Cup".to_owned(),
            price: "12.50".to_owned(),
        },
        CartEvent::SubmitItem {
            id: "sku-2".to_owned(),
            name: "Pour-Over Kettle".to_owned(),
            price: "48.00".to_owned(),
        },
        CartEvent::SubmitItem {
            id: "sku-3".to_owned(),
            name: "Filter Pack".to_owned(),
            price: "6.25".to_owned(),
        },
        CartEvent::RemoveItem {
            id: "sku-3".to_owned(),
        },
        CartEvent::CheckoutRequested,
    ];

    for event in script {
        tracing::debug!(?event, "demo event");
        controller.handle(event).await;
    }
}
