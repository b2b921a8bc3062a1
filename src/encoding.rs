//! BCH(31,21) check computation and reversed-BCD character encoding

use crate::spec;

/// BCH(31,21) encoder with even parity
pub struct BchEncoder;

impl BchEncoder {
    /// Compute the 10-bit check field for the top 21 bits of `word`
    ///
    /// The low 11 bits of `word` must be zero.
    pub fn check_bits(word: u32) -> u32 {
        let mut work = word;
        for _ in 0..21 {
            if work & 0x8000_0000 != 0 {
                work ^= spec::BCH_GENERATOR;
            }
            work <<= 1;
        }
        work >> 21
    }

    /// Fill in check field and parity bit of a codeword whose low 11 bits are zero
    pub fn encode(word: u32) -> u32 {
        debug_assert_eq!(word & !spec::DATA_MASK, 0);
        let mut codeword = word | Self::check_bits(word);
        if codeword.count_ones() % 2 != 0 {
            codeword += 1;
        }
        codeword
    }
}

/// Numeric (BCD) character encoder for message codewords
///
/// Nibbles go on air least significant bit first, so every code is stored
/// with its bit order reversed.
pub struct BcdEncoder;

impl BcdEncoder {
    /// Map a character to its natural 4-bit code
    ///
    /// Returns `None` for characters outside the numeric set.
    pub fn char_code(ch: char) -> Option<u8> {
        match ch {
            '0'..='9' => Some(ch as u8 - b'0'),
            '*' => Some(0x0A),
            'U' => Some(0x0B),
            ' ' => Some(0x0C),
            '-' => Some(0x0D),
            '(' => Some(0x0E),
            ')' => Some(0x0F),
            _ => None,
        }
    }

    /// Reverse the bit order of a 4-bit value (bit0 <-> bit3, bit1 <-> bit2)
    pub fn reverse_nibble(nibble: u8) -> u8 {
        (nibble & 0x0F).reverse_bits() >> 4
    }

    /// Encode a character as a reversed-BCD nibble
    ///
    /// Unsupported characters are sent as `*`.
    pub fn encode_char(ch: char) -> u8 {
        let code = Self::char_code(ch).unwrap_or_else(|| {
            log::warn!("Character {:?} has no numeric code, sending '*' instead", ch);
            0x0A
        });
        Self::reverse_nibble(code)
    }

    /// Decode a reversed-BCD nibble back to its character
    pub fn decode_nibble(nibble: u8) -> char {
        match Self::reverse_nibble(nibble) {
            code @ 0..=9 => (b'0' + code) as char,
            0x0A => '*',
            0x0B => 'U',
            0x0C => ' ',
            0x0D => '-',
            0x0E => '(',
            _ => ')',
        }
    }
}
