//! # TinyRC4 Engine
//!
//! A teaching stream cipher on the 8-symbol alphabet A-H (3 bits per symbol)
//! that records every internal state transition for step-by-step replay.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `Symbol`: The A-H alphabet and its 3-bit codes
//!   - `codec`: Text, bit strings and key parsing
//!   - `engine`: Key schedule, keystream rounds, XOR transform
//!   - `TraceEvent`: One recorded sub-step with S/T snapshots
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `CipherApi`: Driving port (inbound API)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `CipherService`: Implements `CipherApi`
//!
//! - **Handler Layer** (`handler/`): Request validation
//!   - `CipherRequestHandler`: Required fields, length limit, response mapping
//!
//! - **Events Layer** (`events/`): Request/response message types
//!
//! ## Invariants
//!
//! - **Involution**: decrypt(encrypt(P, K), K) == P
//! - **Determinism**: identical inputs give identical output, keystream and trace
//! - **Permutation**: the S box is a permutation of 0..=7 after every swap
//! - **Trace length**: 2 + 8 + 5 x len(input) events
//!
//! ## Usage Example
//!
//! ```
//! use tinyrc4_engine::{CipherApi, CipherService};
//!
//! let service = CipherService::new();
//! let result = service.encrypt("BAG", "2,1,3", false).unwrap();
//! assert_eq!(result.output, "EBA");
//! assert_eq!(result.keystream, vec![5, 1, 6]);
//! ```

pub mod domain;
pub mod error;
pub mod events;
pub mod handler;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    expected_event_count, CipherResult, KeySequence, Phase, Symbol, SwapPair, TraceEvent, SLOTS,
};
pub use error::{CipherError, RequestError};
pub use events::{CipherOutcome, CipherRequest, CipherResponse, ErrorResponse, Operation};
pub use handler::{CipherRequestHandler, DEFAULT_MAX_TEXT_LENGTH};
pub use ports::CipherApi;
pub use service::CipherService;
