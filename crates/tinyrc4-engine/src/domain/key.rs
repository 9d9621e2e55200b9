//! Validated key sequence
//!
//! A key is 1 to 8 values, each in 0-7. It is repeated cyclically to fill
//! the T array during initialization.

use serde::{Deserialize, Serialize};

use super::symbol::SLOTS;
use crate::error::CipherError;

/// Largest value a key slot may hold.
pub const MAX_KEY_VALUE: u8 = (SLOTS - 1) as u8;

/// Immutable, validated key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct KeySequence(Vec<u8>);

impl KeySequence {
    /// Validate raw key values.
    ///
    /// Range is checked before length, matching the order of `parse_key`.
    pub fn new(values: Vec<u8>) -> Result<Self, CipherError> {
        if let Some(bad) = values.iter().find(|&&v| v > MAX_KEY_VALUE) {
            return Err(CipherError::InvalidKeyRange {
                value: bad.to_string(),
            });
        }
        if values.is_empty() || values.len() > SLOTS {
            return Err(CipherError::InvalidKeyLength {
                count: values.len(),
            });
        }
        Ok(Self(values))
    }

    /// Key values in order.
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated key; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `n` with the key repeated cyclically.
    pub fn cyclic(&self, n: usize) -> u8 {
        self.0[n % self.0.len()]
    }
}

impl TryFrom<Vec<u8>> for KeySequence {
    type Error = CipherError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<KeySequence> for Vec<u8> {
    fn from(key: KeySequence) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_boundaries() {
        assert!(KeySequence::new(vec![0]).is_ok());
        assert!(KeySequence::new(vec![7; 8]).is_ok());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            KeySequence::new(vec![]),
            Err(CipherError::InvalidKeyLength { count: 0 })
        );
    }

    #[test]
    fn test_new_rejects_nine_values() {
        assert_eq!(
            KeySequence::new(vec![1; 9]),
            Err(CipherError::InvalidKeyLength { count: 9 })
        );
    }

    #[test]
    fn test_new_rejects_out_of_range_before_length() {
        let result = KeySequence::new(vec![8; 9]);
        assert!(matches!(result, Err(CipherError::InvalidKeyRange { .. })));
    }

    #[test]
    fn test_cyclic_repeats_key() {
        let key = KeySequence::new(vec![2, 1, 3]).unwrap();
        let filled: Vec<u8> = (0..SLOTS).map(|n| key.cyclic(n)).collect();
        assert_eq!(filled, vec![2, 1, 3, 2, 1, 3, 2, 1]);
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let key: KeySequence = serde_json::from_str("[2,1,3]").unwrap();
        assert_eq!(key.values(), &[2, 1, 3]);
        assert!(serde_json::from_str::<KeySequence>("[9]").is_err());
        assert_eq!(serde_json::to_string(&key).unwrap(), "[2,1,3]");
    }
}
