//! # TinyRC4 Gateway
//!
//! HTTP interface for the TinyRC4 engine. Every request is validated and run
//! through `tinyrc4_engine::CipherRequestHandler`; this crate only adds
//! transport, configuration and request logging.
//!
//! ```text
//! POST /api/encrypt[-steps]  ─┐
//! POST /api/decrypt[-steps]  ─┼─→ CipherRequestHandler ─→ CipherService ─→ engine
//! GET  /health               ─┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use tinyrc4_gateway::{load_config, GatewayService};
//!
//! let service = GatewayService::new(load_config())?;
//! service.run(async { tokio::signal::ctrl_c().await.ok(); }).await?;
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod service;

pub use config::{load_config, ConfigError, GatewayConfig, HttpConfig, LimitsConfig};
pub use error::GatewayError;
pub use routes::build_router;
pub use service::GatewayService;
