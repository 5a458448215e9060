//! tallyd: the tally HTTP service.

use anyhow::Result;
use clap::Parser;
use tally_api::{start_server, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// HTTP service that scores submitted receipts.
#[derive(Debug, Parser)]
#[command(name = "tallyd", version)]
struct Args {
    /// Port for the HTTP listener.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Log every request.
    #[arg(long)]
    logging: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.logging { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = format!("0.0.0.0:{}", args.port);
    info!(port = args.port, logging = args.logging, "starting tallyd");

    start_server(AppState::new(), &addr, args.logging).await
}
