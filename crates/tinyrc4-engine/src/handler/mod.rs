//! Handler Layer
//!
//! Validates requests and maps results to response messages.

pub mod request_handler;

pub use request_handler::{CipherRequestHandler, DEFAULT_MAX_TEXT_LENGTH};
