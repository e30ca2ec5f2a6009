//! `relations-api` binary.
//!
//! Parses the command line, sets up logging from `RUST_LOG` (or `--verbose`)
//! and runs the `serve` command against the configured database.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relations_api::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "relations-api exited with an error");
        std::process::exit(1);
    }
}

/// `--verbose` wins over `RUST_LOG`; without either only `info` and above is shown.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
