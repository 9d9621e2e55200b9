//! TinyRC4 engine: key scheduling, keystream rounds and the XOR transform
//!
//! The engine is a pure function of (input symbols, key, trace flag). Each
//! call builds its own `RunState` and `TraceRecorder`; nothing survives the
//! call, so concurrent runs need no coordination.
//!
//! ```text
//! INIT_S  ->  INIT_T  ->  PERMUTE_SWAP x8          (once per run)
//! ROUND_INC_I -> ROUND_UPDATE_J -> ROUND_SWAP
//!   -> ROUND_COMPUTE_T -> ROUND_COMPUTE_K            (once per input symbol)
//! ```
//!
//! Encryption and decryption are the same call; only the caller's labels
//! for input and output differ.

use tracing::debug;

use super::codec::{bits_for_sequence, encode_text};
use super::key::KeySequence;
use super::state::{wrap, RunState, TArray};
use super::symbol::{Symbol, SLOTS};
use super::trace::{Phase, SwapPair, TraceEvent, TraceRecorder};
use crate::error::CipherError;

/// Events recorded before the first round.
pub const INIT_EVENT_COUNT: usize = 2 + SLOTS;

/// Events recorded by each round.
pub const ROUND_EVENT_COUNT: usize = 5;

/// Trace length for an input of `input_len` symbols.
pub const fn expected_event_count(input_len: usize) -> usize {
    INIT_EVENT_COUNT + ROUND_EVENT_COUNT * input_len
}

/// Terminal output of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherResult {
    /// Input rendered as A-H letters
    pub input: String,
    /// Input as concatenated 3-bit codes
    pub input_binary: String,
    /// Output rendered as A-H letters
    pub output: String,
    /// Output as concatenated 3-bit codes
    pub output_binary: String,
    /// Key used for the run
    pub key: KeySequence,
    /// One keystream value per input symbol
    pub keystream: Vec<u8>,
    /// Full step trace, present only when requested
    pub trace: Option<Vec<TraceEvent>>,
}

/// Run the cipher over `input` with `key`.
///
/// Fails only with `EmptyInput`; every other input is already validated by
/// its type.
pub fn run(
    input: &[Symbol],
    key: &KeySequence,
    with_trace: bool,
) -> Result<CipherResult, CipherError> {
    if input.is_empty() {
        return Err(CipherError::EmptyInput);
    }

    let mut recorder = if with_trace {
        TraceRecorder::enabled(expected_event_count(input.len()))
    } else {
        TraceRecorder::disabled()
    };

    let mut state = RunState::new();
    initialize(&mut state, key, &mut recorder);

    let keystream: Vec<u8> = input
        .iter()
        .map(|_| generate_round(&mut state, &mut recorder))
        .collect();

    let output: Vec<Symbol> = input
        .iter()
        .zip(&keystream)
        .map(|(symbol, &k)| symbol.xor(k))
        .collect();

    debug!(
        input_len = input.len(),
        key_len = key.len(),
        events = recorder.len(),
        "TinyRC4 run complete"
    );

    Ok(CipherResult {
        input: encode_text(input),
        input_binary: bits_for_sequence(input),
        output: encode_text(&output),
        output_binary: bits_for_sequence(&output),
        key: key.clone(),
        keystream,
        trace: recorder.finish(),
    })
}

/// Fill S and T, then permute S with the key schedule.
///
/// The schedule's `j` persists across all eight iterations and is local to
/// this pass; it never leaks into the rounds.
fn initialize(state: &mut RunState, key: &KeySequence, recorder: &mut TraceRecorder) {
    recorder.record(Phase::InitS, state, None, || {
        "Initialize S: S[n] = n for n = 0..7".to_string()
    });

    state.tarray = TArray::from_key(key);
    recorder.record(Phase::InitT, state, None, || {
        format!("Initialize T by repeating key {:?}", key.values())
    });

    let mut j: u8 = 0;
    for n in 0..SLOTS as u8 {
        let previous = j;
        let s_n = state.sbox.get(n);
        let t_n = state.tarray.get(n);
        j = wrap(previous as usize + s_n as usize + t_n as usize);
        state.sbox.swap(n, j);
        recorder.record(
            Phase::PermuteSwap,
            state,
            Some(SwapPair { pos1: n, pos2: j }),
            || {
                format!(
                    "Permute n = {n}: j = (j + S[{n}] + T[{n}]) mod 8 = ({previous} + {s_n} + {t_n}) mod 8 = {j}, swap S[{n}] and S[{j}]"
                )
            },
        );
    }
}

/// One keystream round. Returns the round's `k`.
///
/// Counters start at `i = 0, j = 0` after initialization, so the first
/// round works on `i = 1`.
fn generate_round(state: &mut RunState, recorder: &mut TraceRecorder) -> u8 {
    state.t = None;
    state.k = None;

    let i = wrap(state.i.unwrap_or(0) as usize + 1);
    state.i = Some(i);
    let previous_j = state.j.unwrap_or(0);
    state.j = Some(previous_j);
    recorder.record(Phase::RoundIncI, state, None, || {
        format!("Increment i: i = (i + 1) mod 8 = {i}")
    });

    let s_i = state.sbox.get(i);
    let j = wrap(previous_j as usize + s_i as usize);
    state.j = Some(j);
    recorder.record(Phase::RoundUpdateJ, state, None, || {
        format!("Update j: j = (j + S[{i}]) mod 8 = ({previous_j} + {s_i}) mod 8 = {j}")
    });

    let (before_i, before_j) = (state.sbox.get(i), state.sbox.get(j));
    state.sbox.swap(i, j);
    recorder.record(
        Phase::RoundSwap,
        state,
        Some(SwapPair { pos1: i, pos2: j }),
        || format!("Swap S[{i}] and S[{j}]: {before_i} ↔ {before_j}"),
    );

    let (a, b) = (state.sbox.get(i), state.sbox.get(j));
    let t = wrap(a as usize + b as usize);
    state.t = Some(t);
    recorder.record(Phase::RoundComputeT, state, None, || {
        format!("Compute t: t = (S[{i}] + S[{j}]) mod 8 = ({a} + {b}) mod 8 = {t}")
    });

    let k = state.sbox.get(t);
    state.k = Some(k);
    recorder.record(Phase::RoundComputeK, state, None, || {
        format!("Compute k: k = S[{t}] = {k} = {k:03b}")
    });

    k
}
