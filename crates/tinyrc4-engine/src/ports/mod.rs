//! Ports Layer
//!
//! The cipher has no driven dependencies; only the driving port is defined.

pub mod inbound;

pub use inbound::CipherApi;
