//! Run state: S box, T array and the round counters
//!
//! A `RunState` lives for exactly one engine run. It is created fresh,
//! threaded through initialization and every round, then dropped.
//!
//! INVARIANTS:
//! - The S box is a permutation of 0..=7 at every point of a run.
//! - The T array is written once, by `TArray::from_key`.

use super::key::KeySequence;
use super::symbol::SLOTS;

/// Reduce a small sum modulo 8.
pub(crate) fn wrap(value: usize) -> u8 {
    (value % SLOTS) as u8
}

/// The 8-slot permutation array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SBox([u8; SLOTS]);

impl SBox {
    /// `S[n] = n`
    pub fn identity() -> Self {
        let mut slots = [0u8; SLOTS];
        for (n, slot) in slots.iter_mut().enumerate() {
            *slot = n as u8;
        }
        Self(slots)
    }

    pub fn get(&self, index: u8) -> u8 {
        self.0[index as usize]
    }

    /// Swap two slots. The only mutation an S box ever sees.
    pub fn swap(&mut self, a: u8, b: u8) {
        self.0.swap(a as usize, b as usize);
    }

    pub fn snapshot(&self) -> [u8; SLOTS] {
        self.0
    }

    /// True when every value 0..=7 appears exactly once.
    pub fn is_permutation(&self) -> bool {
        is_permutation(&self.0)
    }
}

/// Check that `slots` holds each of 0..=7 exactly once.
pub fn is_permutation(slots: &[u8; SLOTS]) -> bool {
    let mut seen = [false; SLOTS];
    for &v in slots {
        match seen.get_mut(v as usize) {
            Some(flag) if !*flag => *flag = true,
            _ => return false,
        }
    }
    true
}

/// The key expanded to 8 slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TArray([u8; SLOTS]);

impl TArray {
    /// Placeholder before the key is expanded; reads as all zeros.
    pub fn unfilled() -> Self {
        Self([0; SLOTS])
    }

    /// `T[n] = key[n mod len(key)]`
    pub fn from_key(key: &KeySequence) -> Self {
        let mut slots = [0u8; SLOTS];
        for (n, slot) in slots.iter_mut().enumerate() {
            *slot = key.cyclic(n);
        }
        Self(slots)
    }

    pub fn get(&self, index: u8) -> u8 {
        self.0[index as usize]
    }

    pub fn snapshot(&self) -> [u8; SLOTS] {
        self.0
    }
}

/// Mutable state of one run.
///
/// `None` means "not yet defined", which is distinct from a value of 0.
#[derive(Clone, Debug)]
pub struct RunState {
    pub sbox: SBox,
    pub tarray: TArray,
    pub i: Option<u8>,
    pub j: Option<u8>,
    pub t: Option<u8>,
    pub k: Option<u8>,
}

impl RunState {
    /// Fresh state: identity S box, unfilled T array, no counters.
    pub fn new() -> Self {
        Self {
            sbox: SBox::identity(),
            tarray: TArray::unfilled(),
            i: None,
            j: None,
            t: None,
            k: None,
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
