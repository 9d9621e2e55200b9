//! Codec: text <-> symbols <-> bits, and key string -> `KeySequence`
//!
//! Stateless. Every fallible function validates the whole input before
//! returning, so callers never see partially decoded data.

use std::num::IntErrorKind;

use super::key::{KeySequence, MAX_KEY_VALUE};
use super::symbol::Symbol;
use crate::error::CipherError;

/// Decode text into symbols, case-insensitively.
///
/// Fails on the first character outside A-H, reported in uppercase.
pub fn decode_text(text: &str) -> Result<Vec<Symbol>, CipherError> {
    text.chars()
        .map(|c| {
            Symbol::from_char(c).ok_or(CipherError::InvalidCharacter {
                character: c.to_ascii_uppercase(),
            })
        })
        .collect()
}

/// Render symbols as uppercase letters.
pub fn encode_text(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.letter()).collect()
}

/// 3-bit code of one symbol, MSB first.
pub fn symbol_to_bits(symbol: Symbol) -> &'static str {
    symbol.bits()
}

/// Concatenated 3-bit codes in sequence order.
pub fn bits_for_sequence(symbols: &[Symbol]) -> String {
    symbols.iter().map(|&s| symbol_to_bits(s)).collect()
}

/// Parse a comma-separated key such as `"2, 1, 3"`.
///
/// Every token is parsed before any range check, and range is checked
/// before length. An empty or whitespace-only string has no values.
pub fn parse_key(key: &str) -> Result<KeySequence, CipherError> {
    if key.trim().is_empty() {
        return Err(CipherError::InvalidKeyLength { count: 0 });
    }

    let parsed = key
        .split(',')
        .map(str::trim)
        .map(parse_key_token)
        .collect::<Result<Vec<i64>, CipherError>>()?;

    let values = parsed
        .iter()
        .map(|&v| {
            u8::try_from(v)
                .ok()
                .filter(|&b| b <= MAX_KEY_VALUE)
                .ok_or_else(|| CipherError::InvalidKeyRange {
                    value: v.to_string(),
                })
        })
        .collect::<Result<Vec<u8>, CipherError>>()?;

    KeySequence::new(values)
}

fn parse_key_token(token: &str) -> Result<i64, CipherError> {
    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CipherError::InvalidKeyRange {
            value: token.to_string(),
        },
        _ => CipherError::InvalidKeyFormat {
            token: token.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_text_uppercases() {
        let symbols = decode_text("bAg").unwrap();
        assert_eq!(symbols, vec![Symbol::B, Symbol::A, Symbol::G]);
    }

    #[test]
    fn test_decode_text_reports_offending_character() {
        assert_eq!(
            decode_text("Z"),
            Err(CipherError::InvalidCharacter { character: 'Z' })
        );
        assert_eq!(
            decode_text("abz"),
            Err(CipherError::InvalidCharacter { character: 'Z' })
        );
    }

    #[test]
    fn test_decode_text_rejects_whitespace() {
        assert_eq!(
            decode_text("A B"),
            Err(CipherError::InvalidCharacter { character: ' ' })
        );
    }

    #[test]
    fn test_decode_empty_text_is_empty() {
        assert_eq!(decode_text(""), Ok(vec![]));
    }

    #[test]
    fn test_encode_text_inverts_decode() {
        let symbols = decode_text("hgfedcba").unwrap();
        assert_eq!(encode_text(&symbols), "HGFEDCBA");
    }

    #[test]
    fn test_bits_for_sequence() {
        let symbols = decode_text("BAG").unwrap();
        assert_eq!(bits_for_sequence(&symbols), "001000110");
        assert_eq!(bits_for_sequence(&[]), "");
    }

    #[test]
    fn test_parse_key_trims_whitespace() {
        let key = parse_key(" 2, 1 ,3 ").unwrap();
        assert_eq!(key.values(), &[2, 1, 3]);
    }

    #[test]
    fn test_parse_key_single_value() {
        assert_eq!(parse_key("0").unwrap().values(), &[0]);
    }

    #[test]
    fn test_parse_key_accepts_explicit_plus_sign() {
        assert_eq!(parse_key("+3").unwrap().values(), &[3]);
    }

    #[test]
    fn test_parse_key_format_error() {
        assert!(matches!(
            parse_key("x"),
            Err(CipherError::InvalidKeyFormat { .. })
        ));
        assert!(matches!(
            parse_key("1,,2"),
            Err(CipherError::InvalidKeyFormat { .. })
        ));
        assert!(matches!(
            parse_key("1.5"),
            Err(CipherError::InvalidKeyFormat { .. })
        ));
    }

    #[test]
    fn test_parse_key_range_error() {
        assert_eq!(
            parse_key("9"),
            Err(CipherError::InvalidKeyRange {
                value: "9".to_string()
            })
        );
        assert_eq!(
            parse_key("1,-1"),
            Err(CipherError::InvalidKeyRange {
                value: "-1".to_string()
            })
        );
    }

    #[test]
    fn test_parse_key_overflow_is_range_error() {
        assert!(matches!(
            parse_key("99999999999999999999"),
            Err(CipherError::InvalidKeyRange { .. })
        ));
    }

    #[test]
    fn test_parse_key_length_errors() {
        assert_eq!(
            parse_key(""),
            Err(CipherError::InvalidKeyLength { count: 0 })
        );
        assert_eq!(
            parse_key("   "),
            Err(CipherError::InvalidKeyLength { count: 0 })
        );
        assert_eq!(
            parse_key("1,2,3,4,5,6,7,0,1"),
            Err(CipherError::InvalidKeyLength { count: 9 })
        );
    }

    #[test]
    fn test_parse_key_format_checked_before_range() {
        assert!(matches!(
            parse_key("9,x"),
            Err(CipherError::InvalidKeyFormat { .. })
        ));
    }
}
