//! Gateway-level errors (server lifecycle, not request validation)

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(std::io::Error),

    /// Server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(std::io::Error),
}
