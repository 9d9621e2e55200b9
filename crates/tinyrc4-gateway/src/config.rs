//! Gateway configuration with validation.
//!
//! Defaults suit a local classroom server; every field can be overridden
//! from the environment by `load_config`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinyrc4_engine::DEFAULT_MAX_TEXT_LENGTH;
use tracing::{info, warn};

/// Main gateway configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Request limits
    pub limits: LimitsConfig,
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.limits.max_request_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_request_size cannot be 0".into(),
            ));
        }

        if self.limits.max_text_length == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_text_length cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 5000)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
        }
    }
}

/// Request limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes
    pub max_request_size: usize,
    /// Maximum text length in symbols
    pub max_text_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_size: 64 * 1024,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("port cannot be 0")]
    InvalidPort,

    #[error("invalid limit: {0}")]
    InvalidLimit(String),
}

/// Environment variable names read by `load_config`.
pub mod env_vars {
    pub const HOST: &str = "TINYRC4_HOST";
    pub const PORT: &str = "TINYRC4_PORT";
    pub const MAX_REQUEST_SIZE: &str = "TINYRC4_MAX_REQUEST_SIZE";
    pub const MAX_TEXT_LENGTH: &str = "TINYRC4_MAX_TEXT_LENGTH";
}

/// Build configuration from defaults plus environment overrides.
pub fn load_config() -> GatewayConfig {
    load_config_from(|name| std::env::var(name).ok())
}

/// Same as `load_config`, reading variables through `lookup`.
///
/// Values that fail to parse are logged and ignored.
pub fn load_config_from<F>(lookup: F) -> GatewayConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = GatewayConfig::default();

    override_from(&lookup, env_vars::HOST, &mut config.http.host);
    override_from(&lookup, env_vars::PORT, &mut config.http.port);
    override_from(
        &lookup,
        env_vars::MAX_REQUEST_SIZE,
        &mut config.limits.max_request_size,
    );
    override_from(
        &lookup,
        env_vars::MAX_TEXT_LENGTH,
        &mut config.limits.max_text_length,
    );

    config
}

fn override_from<F, T>(lookup: &F, name: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Debug,
{
    let Some(raw) = lookup(name) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => {
            info!(var = name, value = ?value, "Loaded override from environment");
            *target = value;
        }
        Err(_) => warn!(var = name, value = %raw, "Ignoring unparseable override"),
    }
}
