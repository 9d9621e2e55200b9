//! Inbound Ports (Driving Ports)
//!
//! The API that the HTTP layer and the CLI use to drive the cipher.

use crate::domain::CipherResult;
use crate::error::CipherError;
use crate::events::Operation;

/// Primary cipher API (Driving Port)
///
/// Text and key arrive as raw strings and are validated by the codec
/// before any cipher state is created.
pub trait CipherApi: Send + Sync {
    /// Encrypt plaintext.
    ///
    /// # Arguments
    /// * `plaintext` - A-H letters, any case
    /// * `key` - comma-separated values in 0-7
    /// * `with_trace` - record every sub-step
    fn encrypt(&self, plaintext: &str, key: &str, with_trace: bool)
        -> Result<CipherResult, CipherError>;

    /// Decrypt ciphertext. Same algorithm as `encrypt`.
    fn decrypt(&self, ciphertext: &str, key: &str, with_trace: bool)
        -> Result<CipherResult, CipherError>;

    /// Dispatch on `operation`.
    fn execute(
        &self,
        operation: Operation,
        text: &str,
        key: &str,
        with_trace: bool,
    ) -> Result<CipherResult, CipherError> {
        match operation {
            Operation::Encrypt => self.encrypt(text, key, with_trace),
            Operation::Decrypt => self.decrypt(text, key, with_trace),
        }
    }
}
