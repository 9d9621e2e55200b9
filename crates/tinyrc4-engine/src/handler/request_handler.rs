//! Request Handler
//!
//! Validates incoming requests and turns every outcome into a response:
//! - Reject a request whose text or key is blank after trimming
//! - Reject text longer than the configured limit
//! - Run the cipher through the `CipherApi` port
//! - Report any failure as `{ success: false, error }`, never as a panic

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::RequestError;
use crate::events::{CipherOutcome, CipherRequest, CipherResponse};
use crate::ports::CipherApi;

/// Default upper bound on request text, in symbols.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1024;

/// Handler for cipher requests
pub struct CipherRequestHandler<A: CipherApi> {
    api: Arc<A>,
    max_text_length: usize,
}

impl<A: CipherApi> CipherRequestHandler<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }

    /// Override the text length limit.
    pub fn with_max_text_length(mut self, max: usize) -> Self {
        self.max_text_length = max;
        self
    }

    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    /// Check request-level rules. Codec validation happens later, in the service.
    pub fn validate(&self, request: &CipherRequest) -> Result<(), RequestError> {
        let text = request.text.trim();
        let key = request.key.trim();

        if text.is_empty() || key.is_empty() {
            return Err(RequestError::MissingField {
                label: request.operation.input_label(),
            });
        }

        let length = text.chars().count();
        if length > self.max_text_length {
            return Err(RequestError::TextTooLong {
                length,
                max: self.max_text_length,
            });
        }

        Ok(())
    }

    /// Validate and run, keeping the typed error.
    pub fn process(&self, request: &CipherRequest) -> Result<CipherOutcome, RequestError> {
        self.validate(request)?;
        let result = self.api.execute(
            request.operation,
            request.text.trim(),
            request.key.trim(),
            request.steps,
        )?;
        Ok(CipherOutcome::from_result(request.operation, result))
    }

    /// Validate, run and map to the wire response.
    pub fn handle(&self, request: &CipherRequest) -> CipherResponse {
        let result = self.process(request);
        match &result {
            Ok(outcome) => info!(
                operation = ?request.operation,
                symbols = outcome.stream.len(),
                steps = request.steps,
                "Cipher request succeeded"
            ),
            Err(e) => warn!(
                operation = ?request.operation,
                error = %e,
                "Cipher request rejected"
            ),
        }
        result.into()
    }
}

impl<A: CipherApi> Clone for CipherRequestHandler<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            max_text_length: self.max_text_length,
        }
    }
}
