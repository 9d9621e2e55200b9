//! Request messages
//!
//! Transport-independent shape consumed from the HTTP and CLI layers.

use serde::{Deserialize, Serialize};

/// Which label the caller puts on the input.
///
/// Both run the same algorithm; the transform is its own inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    /// Label of the input text in messages ("Plaintext" / "Ciphertext").
    pub fn input_label(&self) -> &'static str {
        match self {
            Operation::Encrypt => "Plaintext",
            Operation::Decrypt => "Ciphertext",
        }
    }

    /// Noun for result headings ("Encryption" / "Decryption").
    pub fn title(&self) -> &'static str {
        match self {
            Operation::Encrypt => "Encryption",
            Operation::Decrypt => "Decryption",
        }
    }
}

/// A request to run the cipher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherRequest {
    /// Plaintext when encrypting, ciphertext when decrypting
    #[serde(default)]
    pub text: String,
    /// Comma-separated key, e.g. "2,1,3"
    #[serde(default)]
    pub key: String,
    /// Encrypt or decrypt
    pub operation: Operation,
    /// Include the full step trace in the response
    #[serde(default)]
    pub steps: bool,
}

impl CipherRequest {
    pub fn new(
        operation: Operation,
        text: impl Into<String>,
        key: impl Into<String>,
        steps: bool,
    ) -> Self {
        Self {
            text: text.into(),
            key: key.into(),
            operation,
            steps,
        }
    }
}
