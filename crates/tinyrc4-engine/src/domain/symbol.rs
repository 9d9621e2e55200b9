//! The 8-symbol alphabet
//!
//! Each symbol is bijective with a 3-bit value and an uppercase letter:
//! `A = 000`, `B = 001`, ..., `H = 111`. The tables below are indexed by the
//! 3-bit value in both directions, and the const block checks at compile
//! time that they agree on all eight entries.

/// Number of alphabet symbols, S-box slots and T-array slots.
pub const SLOTS: usize = 8;

/// Mask selecting the low three bits.
const VALUE_MASK: u8 = (SLOTS - 1) as u8;

/// One symbol of the A-H alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Symbol {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

const SYMBOLS: [Symbol; SLOTS] = [
    Symbol::A,
    Symbol::B,
    Symbol::C,
    Symbol::D,
    Symbol::E,
    Symbol::F,
    Symbol::G,
    Symbol::H,
];

const LETTERS: [char; SLOTS] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

const BITS: [&str; SLOTS] = ["000", "001", "010", "011", "100", "101", "110", "111"];

const _: () = {
    let mut n = 0;
    while n < SLOTS {
        assert!(SYMBOLS[n] as usize == n);
        assert!(LETTERS[n] as usize == 'A' as usize + n);
        let bits = BITS[n].as_bytes();
        assert!(bits.len() == 3);
        let decoded = ((bits[0] - b'0') << 2) | ((bits[1] - b'0') << 1) | (bits[2] - b'0');
        assert!(decoded as usize == n);
        n += 1;
    }
};

impl Symbol {
    /// All symbols in value order.
    pub const ALL: [Symbol; SLOTS] = SYMBOLS;

    /// The 3-bit value (0-7).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Symbol for a 3-bit value, `None` above 7.
    pub fn from_value(value: u8) -> Option<Self> {
        SYMBOLS.get(value as usize).copied()
    }

    /// Symbol for a letter, case-insensitive. `None` outside A-H.
    pub fn from_char(c: char) -> Option<Self> {
        let offset = (c.to_ascii_uppercase() as u32).checked_sub('A' as u32)?;
        SYMBOLS.get(offset as usize).copied()
    }

    /// Uppercase letter for this symbol.
    pub fn letter(self) -> char {
        LETTERS[self as usize]
    }

    /// 3-bit code, most significant bit first.
    pub fn bits(self) -> &'static str {
        BITS[self as usize]
    }

    /// XOR with a keystream value. Only the low three bits of `k` are used.
    pub fn xor(self, k: u8) -> Self {
        SYMBOLS[((self as u8 ^ k) & VALUE_MASK) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_and_value_bijection() {
        for (n, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.value() as usize, n);
            assert_eq!(Symbol::from_value(n as u8), Some(*symbol));
            assert_eq!(Symbol::from_char(symbol.letter()), Some(*symbol));
        }
    }

    #[test]
    fn test_from_char_is_case_insensitive() {
        assert_eq!(Symbol::from_char('g'), Some(Symbol::G));
        assert_eq!(Symbol::from_char('a'), Some(Symbol::A));
    }

    #[test]
    fn test_from_char_rejects_outside_alphabet() {
        for c in ['I', 'Z', '@', '0', ' ', 'é'] {
            assert_eq!(Symbol::from_char(c), None, "{c:?} must be rejected");
        }
    }

    #[test]
    fn test_from_value_rejects_above_seven() {
        assert_eq!(Symbol::from_value(8), None);
        assert_eq!(Symbol::from_value(255), None);
    }

    #[test]
    fn test_bits_are_msb_first() {
        assert_eq!(Symbol::B.bits(), "001");
        assert_eq!(Symbol::E.bits(), "100");
        assert_eq!(Symbol::G.bits(), "110");
    }

    #[test]
    fn test_xor_is_self_inverse() {
        for symbol in Symbol::ALL {
            for k in 0..SLOTS as u8 {
                assert_eq!(symbol.xor(k).xor(k), symbol);
            }
        }
        assert_eq!(Symbol::B.xor(5), Symbol::E);
    }
}
