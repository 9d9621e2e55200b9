//! Cipher Service
//!
//! Orchestrates codec validation and the engine run. Holds no state, so one
//! instance can serve any number of concurrent callers.

use tracing::debug;

use crate::domain::{decode_text, engine, parse_key, CipherResult};
use crate::error::CipherError;
use crate::ports::CipherApi;

/// Cipher Service implementation of `CipherApi`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CipherService;

impl CipherService {
    pub fn new() -> Self {
        Self
    }

    /// Validate key, then text, then run.
    fn transform(&self, text: &str, key: &str, with_trace: bool) -> Result<CipherResult, CipherError> {
        let key = parse_key(key)?;
        let symbols = decode_text(text)?;
        debug!(
            symbols = symbols.len(),
            key_len = key.len(),
            with_trace,
            "Running TinyRC4"
        );
        engine::run(&symbols, &key, with_trace)
    }
}

impl CipherApi for CipherService {
    fn encrypt(
        &self,
        plaintext: &str,
        key: &str,
        with_trace: bool,
    ) -> Result<CipherResult, CipherError> {
        self.transform(plaintext, key, with_trace)
    }

    fn decrypt(
        &self,
        ciphertext: &str,
        key: &str,
        with_trace: bool,
    ) -> Result<CipherResult, CipherError> {
        self.transform(ciphertext, key, with_trace)
    }
}
