//! Response messages
//!
//! Success: `{ success: true, plaintext, plaintext_binary, ciphertext,
//! ciphertext_binary, key, stream, steps? }`. Failure: `{ success: false,
//! error }`.

use serde::{Deserialize, Serialize};

use super::requests::Operation;
use crate::domain::{CipherResult, TraceEvent};

/// Successful run, labelled for the operation that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherOutcome {
    /// Always true
    pub success: bool,
    pub plaintext: String,
    pub plaintext_binary: String,
    pub ciphertext: String,
    pub ciphertext_binary: String,
    /// Key values used
    pub key: Vec<u8>,
    /// Keystream, one value per symbol
    pub stream: Vec<u8>,
    /// Step trace, only when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<TraceEvent>>,
}

impl CipherOutcome {
    /// Map engine input/output onto plaintext/ciphertext.
    pub fn from_result(operation: Operation, result: CipherResult) -> Self {
        let (plaintext, plaintext_binary, ciphertext, ciphertext_binary) = match operation {
            Operation::Encrypt => (
                result.input,
                result.input_binary,
                result.output,
                result.output_binary,
            ),
            Operation::Decrypt => (
                result.output,
                result.output_binary,
                result.input,
                result.input_binary,
            ),
        };

        Self {
            success: true,
            plaintext,
            plaintext_binary,
            ciphertext,
            ciphertext_binary,
            key: result.key.into(),
            stream: result.keystream,
            steps: result.trace,
        }
    }
}

/// Validation failure
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Human-readable message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Either outcome of a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CipherResponse {
    Success(CipherOutcome),
    Failure(ErrorResponse),
}

impl CipherResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, CipherResponse::Success(_))
    }

    pub fn outcome(&self) -> Option<&CipherOutcome> {
        match self {
            CipherResponse::Success(outcome) => Some(outcome),
            CipherResponse::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CipherResponse::Success(_) => None,
            CipherResponse::Failure(failure) => Some(&failure.error),
        }
    }
}

impl<E: std::fmt::Display> From<Result<CipherOutcome, E>> for CipherResponse {
    fn from(result: Result<CipherOutcome, E>) -> Self {
        match result {
            Ok(outcome) => CipherResponse::Success(outcome),
            Err(e) => CipherResponse::Failure(ErrorResponse::new(e.to_string())),
        }
    }
}
