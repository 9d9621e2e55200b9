//! Step trace: one immutable event per sub-operation of a run
//!
//! Events carry a snapshot of the S box and T array taken at the moment
//! they were recorded, so the sequence can be replayed frame by frame.
//! The recorder only appends; nothing is edited after it is pushed.

use serde::{Deserialize, Serialize};

use super::state::RunState;
use super::symbol::SLOTS;

/// Sub-operation tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    InitS,
    InitT,
    PermuteSwap,
    RoundIncI,
    RoundUpdateJ,
    RoundSwap,
    RoundComputeT,
    RoundComputeK,
}

impl Phase {
    /// Wire name, e.g. `ROUND_SWAP`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::InitS => "INIT_S",
            Phase::InitT => "INIT_T",
            Phase::PermuteSwap => "PERMUTE_SWAP",
            Phase::RoundIncI => "ROUND_INC_I",
            Phase::RoundUpdateJ => "ROUND_UPDATE_J",
            Phase::RoundSwap => "ROUND_SWAP",
            Phase::RoundComputeT => "ROUND_COMPUTE_T",
            Phase::RoundComputeK => "ROUND_COMPUTE_K",
        }
    }

    /// Part of the once-per-run initialization rather than a round.
    pub fn is_initialization(&self) -> bool {
        matches!(self, Phase::InitS | Phase::InitT | Phase::PermuteSwap)
    }

    /// Events that carry a swapped index pair.
    pub fn is_swap(&self) -> bool {
        matches!(self, Phase::PermuteSwap | Phase::RoundSwap)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indices exchanged by a swap event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapPair {
    pub pos1: u8,
    pub pos2: u8,
}

/// One recorded sub-step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    phase: Phase,
    description: String,
    #[serde(rename = "S")]
    sbox: [u8; SLOTS],
    #[serde(rename = "T")]
    tarray: [u8; SLOTS],
    i: Option<u8>,
    j: Option<u8>,
    t: Option<u8>,
    k: Option<u8>,
    swap: Option<SwapPair>,
}

impl TraceEvent {
    /// Snapshot `state` under `phase`.
    pub fn capture(
        phase: Phase,
        description: String,
        state: &RunState,
        swap: Option<SwapPair>,
    ) -> Self {
        Self {
            phase,
            description,
            sbox: state.sbox.snapshot(),
            tarray: state.tarray.snapshot(),
            i: state.i,
            j: state.j,
            t: state.t,
            k: state.k,
            swap,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// S box as it was when the event was recorded.
    pub fn sbox(&self) -> &[u8; SLOTS] {
        &self.sbox
    }

    /// T array as it was when the event was recorded.
    pub fn tarray(&self) -> &[u8; SLOTS] {
        &self.tarray
    }

    pub fn i(&self) -> Option<u8> {
        self.i
    }

    pub fn j(&self) -> Option<u8> {
        self.j
    }

    pub fn t(&self) -> Option<u8> {
        self.t
    }

    pub fn k(&self) -> Option<u8> {
        self.k
    }

    pub fn swap(&self) -> Option<SwapPair> {
        self.swap
    }
}

/// Append-only event sink for one run.
///
/// When disabled, `record` never builds the event or its description.
#[derive(Debug)]
pub struct TraceRecorder {
    events: Option<Vec<TraceEvent>>,
}

impl TraceRecorder {
    /// Recorder that keeps events, sized for `capacity` of them.
    pub fn enabled(capacity: usize) -> Self {
        Self {
            events: Some(Vec::with_capacity(capacity)),
        }
    }

    /// Recorder that discards everything.
    pub fn disabled() -> Self {
        Self { events: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.events.is_some()
    }

    /// Append a snapshot of `state`. `describe` runs only when enabled.
    pub fn record<F>(&mut self, phase: Phase, state: &RunState, swap: Option<SwapPair>, describe: F)
    where
        F: FnOnce() -> String,
    {
        if let Some(events) = self.events.as_mut() {
            events.push(TraceEvent::capture(phase, describe(), state, swap));
        }
    }

    pub fn len(&self) -> usize {
        self.events.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hand over the recorded events, `None` if recording was disabled.
    pub fn finish(self) -> Option<Vec<TraceEvent>> {
        self.events
    }
}
