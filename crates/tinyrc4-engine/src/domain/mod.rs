//! Domain Layer - Pure cipher logic
//!
//! This layer contains:
//! - The A-H alphabet and its 3-bit codes
//! - The codec for text, bits and keys
//! - Run state (S box, T array, counters)
//! - The step trace model
//! - The engine itself
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No shared or static mutable state

pub mod codec;
pub mod engine;
pub mod key;
pub mod state;
pub mod symbol;
pub mod trace;

pub use codec::{bits_for_sequence, decode_text, encode_text, parse_key, symbol_to_bits};
pub use engine::{expected_event_count, run, CipherResult};
pub use key::KeySequence;
pub use state::{is_permutation, RunState, SBox, TArray};
pub use symbol::{Symbol, SLOTS};
pub use trace::{Phase, SwapPair, TraceEvent, TraceRecorder};
