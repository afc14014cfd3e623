// PRDatabase — Application Entry Point
//
// Parses CLI arguments, initializes structured logging on stderr, and
// dispatches to the command handler. The tokio runtime drives the startup
// splash delay.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prdatabase::cli::{execute, Cli};

#[tokio::main]
async fn main() {
    // RUST_LOG=prdatabase=debug for verbose output. Passwords are never logged.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("prdatabase=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
