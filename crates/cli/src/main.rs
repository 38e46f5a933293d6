//! Cartlab CLI - interactive cart and checkout simulation.
//!
//! # Usage
//!
//! ```bash
//! # Start an interactive cart session
//! cartlab session
//!
//! # Run the scripted demo checkout
//! cartlab demo
//! ```
//!
//! # Commands
//!
//! - `session` - Read cart commands from stdin (`add`, `remove`, `summary`,
//!   `checkout`, `quit`) and render results to the terminal
//! - `demo` - Drive a fixed add/remove/checkout sequence
//!
//! Checkout behavior (tax rate, shipping fee, latency, settle rate) is
//! configured through `CARTLAB_*` environment variables; see
//! `cartlab-checkout`'s config module.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use cartlab_checkout::{CheckoutConfig, PaymentGateway};

mod commands;

#[derive(Parser)]
#[command(name = "cartlab")]
#[command(author, version, about = "Cart and checkout simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive cart session
    Session,
    /// Run a scripted demo checkout
    Demo,
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cartlab=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = CheckoutConfig::from_env().expect("Failed to load configuration");
    let gateway = PaymentGateway::new(config);

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, gateway).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, gateway: PaymentGateway) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Session => commands::session::run(gateway).await?,
        Commands::Demo => commands::demo::run(gateway).await,
    }
    Ok(())
}
