//! Standalone server binary.
//!
//! ```bash
//! PORT=10000 cargo run --bin server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: bind IP address (default: 0.0.0.0)
//! - `PORT`: listen port (default: 10000)
//! - `RUST_LOG`: tracing filter (default: age_fraction_calculator=info)

use age_fraction_calculator::config::ServerConfig;
use age_fraction_calculator::logging;
use age_fraction_calculator::server::{self, AppState};
use age_fraction_calculator::version;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logger(false);

    let config = ServerConfig::from_env()?;
    tracing::info!(version = version(), port = config.port, "Starting age fraction calculator");

    server::serve(&config, AppState::default()).await
}
