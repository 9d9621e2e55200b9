//! # TinyRC4 Gateway
//!
//! Entry point for the HTTP server.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`RUST_LOG`, default `info`)
//! 2. Load configuration (defaults + `TINYRC4_*` environment overrides)
//! 3. Validate configuration
//! 4. Serve until Ctrl+C

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tinyrc4_gateway::{load_config, GatewayService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    // Load configuration
    let config = load_config();
    let service = GatewayService::new(config).context("invalid gateway configuration")?;

    info!(
        max_text_length = service.config().limits.max_text_length,
        max_request_size = service.config().limits.max_request_size,
        "Configuration loaded"
    );

    service
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl+C");
            }
            info!("Received shutdown signal");
        })
        .await?;

    Ok(())
}
