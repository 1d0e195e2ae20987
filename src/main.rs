//! Hotel recommendation service.
//!
//! # Architecture Overview
//!
//! ```text
//!   GET /recommendation
//!   ─────────────────────▶ http::server ──▶ http::recommendation (parse query)
//!                                                   │
//!                                                   ▼
//!                                      recommendation::engine
//!                                      (validate, filter, select)
//!                                                   │
//!                                                   ▼
//!                                      partner::adaptor ──▶ partner::client ──▶ Partner API
//!                                                            (timeouts, retries)
//!
//!   Cross-cutting: config (TOML), observability (tracing, metrics), lifecycle
//! ```

use clap::Parser;
use std::path::PathBuf;

use hotel_recommender::config::load_config;
use hotel_recommender::lifecycle::{self, Shutdown};
use hotel_recommender::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "hotel-recommender")]
#[command(about = "Recommends the cheapest partner hotel within a budget", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        partner = %config.partner.base_url,
        max_attempts = config.retries.max_attempts,
        "hotel-recommender starting"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    if let Err(e) = lifecycle::start(config, &shutdown).await {
        tracing::error!(error = %e, "Fatal error");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
