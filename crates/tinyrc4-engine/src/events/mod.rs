//! Events Layer - request and response message types

pub mod requests;
pub mod responses;

pub use requests::{CipherRequest, Operation};
pub use responses::{CipherOutcome, CipherResponse, ErrorResponse};
