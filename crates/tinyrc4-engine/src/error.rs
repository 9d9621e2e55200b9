//! Error types for the TinyRC4 engine
//!
//! Every variant is an input-validation failure raised before any cipher
//! state exists. The `Display` text is the message shown to users.

use thiserror::Error;

/// Validation failures of the codec and engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Text contains a character outside A-H
    #[error("Invalid character '{character}'. Only A-H allowed.")]
    InvalidCharacter { character: char },

    /// A key token is not an integer
    #[error("Key must contain only integers separated by commas")]
    InvalidKeyFormat { token: String },

    /// A key value is outside 0-7
    #[error("Key values must be 0-7, got {value}")]
    InvalidKeyRange { value: String },

    /// Key has zero or more than eight values
    #[error("Key must have 1-8 values, got {count}")]
    InvalidKeyLength { count: usize },

    /// Nothing to encrypt or decrypt
    #[error("Text is required and must contain at least one symbol")]
    EmptyInput,
}

/// Request-level failures raised by the handler before the engine runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Text or key missing from the request
    #[error("{label} and key are required")]
    MissingField { label: &'static str },

    /// Text longer than the configured limit
    #[error("Text exceeds maximum length of {max} symbols")]
    TextTooLong { length: usize, max: usize },

    #[error(transparent)]
    Cipher(#[from] CipherError),
}
