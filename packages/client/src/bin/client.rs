//! Terminal scoreboard client for the Ancient Bowling game service.
//!
//! Creates games, adds players, starts games and records throws on the
//! service, then shows the scoreboard the service computed.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin ancient-bowling-client
//! cargo run --bin ancient-bowling-client -- --url http://127.0.0.1:8080/api -t 5
//! ```

use std::time::Duration;

use clap::Parser;

use ancient_bowling_client::{
    ClientConfig,
    config::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS},
    runner::run_client,
};
use ancient_bowling_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "ancient-bowling-client")]
#[command(about = "Scoreboard client for the Ancient Bowling game service", long_about = None)]
struct Args {
    /// Base URL of the game service API
    #[arg(short = 'u', long, default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Request timeout in seconds
    #[arg(short = 't', long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(&[env!("CARGO_PKG_NAME"), env!("CARGO_BIN_NAME")], "info");

    let args = Args::parse();

    let config = match ClientConfig::new(&args.url, Duration::from_secs(args.timeout_secs)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Run the client
    if let Err(e) = run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
