//! Interactive cart session.
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! add <id> <price> <name...>
//! remove <id>
//! summary
//! checkout
//! quit
//! ```

// Terminal rendering is this module's job
#![allow(clippy::print_stdout, clippy::print_stderr)]

use tokio::io::{AsyncBufReadExt, BufReader};

use cartlab_checkout::{CartController, CartEvent, CartPresenter, PaymentGateway};
use cartlab_core::format_currency;

/// Presenter that renders to the terminal.
pub struct TerminalPresenter;

impl CartPresenter for TerminalPresenter {
    fn render_summary(&self, item_count: usize, subtotal: f64) {
        println!("{item_count} item(s) in cart, subtotal {}", format_currency(subtotal));
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            println!("Processing payment...");
        }
    }

    fn show_success(&self, message: &str) {
        println!("{message}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Event(CartEvent),
    Summary,
    Quit,
}

/// Parse one input line into a session command.
///
/// Returns a usage message for lines that do not parse. Blank lines yield
/// no command at all.
fn parse_command(line: &str) -> Option<Result<SessionCommand, String>> {
    let mut words = line.split_whitespace();
    let keyword = words.next()?;

    let parsed = match keyword {
        "add" => {
            let id = words.next();
            let price = words.next();
            let name = words.collect::<Vec<_>>().join(" ");
            match (id, price) {
                (Some(id), Some(price)) if !name.is_empty() => {
                    Ok(SessionCommand::Event(CartEvent::SubmitItem {
                        id: id.to_owned(),
                        name,
                        price: price.to_owned(),
                    }))
                }
                _ => Err("usage: add <id> <price> <name...>".to_owned()),
            }
        }
        "remove" => match words.next() {
            Some(id) => Ok(SessionCommand::Event(CartEvent::RemoveItem {
                id: id.to_owned(),
            })),
            None => Err("usage: remove <id>".to_owned()),
        },
        "checkout" => Ok(SessionCommand::Event(CartEvent::CheckoutRequested)),
        "summary" => Ok(SessionCommand::Summary),
        "quit" | "exit" => Ok(SessionCommand::Quit),
        other => Err(format!("unknown command: {other}")),
    };

    Some(parsed)
}

/// Run the interactive session until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading stdin fails.
pub async fn run(gateway: PaymentGateway) -> Result<(), std::io::Error> {
    let mut controller = CartController::new(gateway, TerminalPresenter);

    println!("cartlab session - add <id> <price> <name...>, remove <id>, summary, checkout, quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(Ok(SessionCommand::Event(event))) => controller.handle(event).await,
            Some(Ok(SessionCommand::Summary)) => {
                let cart = controller.cart();
                println!(
                    "{} item(s) in cart, subtotal {}",
                    cart.item_count(),
                    format_currency(cart.total_amount())
                );
            }
            Some(Ok(SessionCommand::Quit)) => break,
            Some(Err(usage)) => eprintln!("{usage}"),
            None => {}
        }
    }

    Ok(())
}
