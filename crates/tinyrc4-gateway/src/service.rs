//! Gateway service: binds the listener and serves the router until shutdown.

use std::future::Future;

use tracing::info;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::routes::build_router;

/// HTTP gateway in front of the cipher engine
pub struct GatewayService {
    config: GatewayConfig,
}

impl GatewayService {
    /// Create a new gateway, validating its configuration
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Serve until `shutdown` resolves
    pub async fn run<S>(self, shutdown: S) -> Result<(), GatewayError>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(GatewayError::Bind)?;
        info!(addr = %addr, "Starting TinyRC4 HTTP gateway");

        axum::serve(listener, build_router(&self.config))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(GatewayError::Serve)?;

        info!("TinyRC4 HTTP gateway stopped");
        Ok(())
    }
}
