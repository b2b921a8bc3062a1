//! Address and message codeword construction

use crate::core::{Address, Codeword, FunctionCode};
use crate::encoding::{BcdEncoder, BchEncoder};
use crate::spec;

/// A codeword together with its absolute slot (0-31) across both batches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedCodeword {
    /// Absolute slot index; 0-15 is batch 1, 16-31 is batch 2
    pub slot: usize,
    /// The codeword to place
    pub codeword: Codeword,
}

/// Builder for the address codeword of an alert
///
/// Format:
/// - Bit 31: 0 (address codeword)
/// - Bits 30-13: high 18 bits of the address
/// - Bits 12-11: function code
/// - Bits 10-0: BCH check field and parity
pub struct AddressCodewordBuilder;

impl AddressCodewordBuilder {
    /// Build the address codeword and the slot its frame maps to
    pub fn build(address: Address, function: FunctionCode) -> PlacedCodeword {
        let slot = address.frame() as usize * spec::CODEWORDS_PER_FRAME;
        let payload = (address.pager_bits() << 2) | (function.bits() as u32 & 0x3);
        PlacedCodeword {
            slot,
            codeword: Codeword::from_raw(BchEncoder::encode(payload << 11)),
        }
    }

    /// Recover the 18 address bits and the function code
    ///
    /// Returns `None` for message and idle codewords.
    pub fn decode(codeword: Codeword) -> Option<(u32, FunctionCode)> {
        if codeword.message_flag() || codeword == Codeword::IDLE {
            return None;
        }
        let function = FunctionCode::try_from(codeword.function_bits()).ok()?;
        Some((codeword.address_bits(), function))
    }
}

/// Encoder for numeric message codewords
///
/// Format:
/// - Bit 31: 1 (message codeword)
/// - Bits 30-11: five reversed-BCD characters, first character highest
/// - Bits 10-0: BCH check field and parity
pub struct MessageEncoder;

impl MessageEncoder {
    /// Clamp text to the maximum message length
    pub fn truncate(text: &str) -> &str {
        match text.char_indices().nth(spec::MAX_TEXT_LEN) {
            Some((idx, _)) => {
                log::debug!(
                    "Text clamped to {} characters (dropped {:?})",
                    spec::MAX_TEXT_LEN,
                    &text[idx..]
                );
                &text[..idx]
            }
            None => text,
        }
    }

    /// Encode one group of up to 5 characters into a message codeword
    ///
    /// Missing characters of a short group are zero-filled on the right.
    pub fn encode_group(group: &[char]) -> Codeword {
        let mut payload = 0u32;
        for &ch in group.iter().take(spec::CHARS_PER_CODEWORD) {
            payload = (payload << 4) | (BcdEncoder::encode_char(ch) as u32 & 0x0F);
        }
        payload <<= (spec::CHARS_PER_CODEWORD - group.len().min(spec::CHARS_PER_CODEWORD)) * 4;
        Codeword::from_raw(BchEncoder::encode((payload << 11) | 0x8000_0000))
    }

    /// Encode text into message codewords placed from `start_slot` onwards
    ///
    /// `text` is expected to be clamped with [`MessageEncoder::truncate`].
    pub fn encode(text: &str, start_slot: usize) -> Vec<PlacedCodeword> {
        let chars: Vec<char> = text.chars().collect();
        chars
            .chunks(spec::CHARS_PER_CODEWORD)
            .enumerate()
            .map(|(i, group)| PlacedCodeword {
                slot: start_slot + i,
                codeword: Self::encode_group(group),
            })
            .collect()
    }

    /// Decode the characters carried by message codewords
    ///
    /// Non-message codewords are skipped. Zero fill of a short final group
    /// reads back as `0`.
    pub fn decode(codewords: &[Codeword]) -> String {
        let mut text = String::with_capacity(codewords.len() * spec::CHARS_PER_CODEWORD);
        for cw in codewords.iter().filter(|cw| cw.message_flag()) {
            let payload = cw.payload();
            for i in (0..spec::CHARS_PER_CODEWORD).rev() {
                text.push(BcdEncoder::decode_nibble(((payload >> (i * 4)) & 0x0F) as u8));
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use proptest::prelude::*;

    #[test]
    fn test_address_codeword_slot() -> Result<()> {
        let placed = AddressCodewordBuilder::build(Address::new(1)?, FunctionCode::TimeSync);
        assert_eq!(placed.slot, 2);
        assert_eq!(placed.codeword.value(), 0x0000_0000);

        let placed = AddressCodewordBuilder::build(Address::new(1234567)?, FunctionCode::Up);
        assert_eq!(placed.slot, 14);
        assert_eq!(placed.codeword.value(), 0x4B5A_1A25);

        let placed = AddressCodewordBuilder::build(Address::new(1234560)?, FunctionCode::Down);
        assert_eq!(placed.slot, 0);
        assert_eq!(placed.codeword.value(), 0x4B5A_0953);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_message_words() {
        assert_eq!(
            AddressCodewordBuilder::decode(Codeword::from_raw(0xC261_572C)),
            None
        );
        assert_eq!(AddressCodewordBuilder::decode(Codeword::IDLE), None);
    }

    #[test]
    fn test_encode_full_group() {
        let words = MessageEncoder::encode("12345", 1);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].slot, 1);
        assert_eq!(words[0].codeword.value(), 0xC261_572C);
    }

    #[test]
    fn test_encode_partial_group() {
        let words = MessageEncoder::encode("U*x", 1);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].codeword.value(), 0xEAA8_0770);
        assert_eq!(
            MessageEncoder::encode("U**", 1)[0].codeword,
            words[0].codeword
        );
    }

    #[test]
    fn test_encode_sequential_slots() {
        let words = MessageEncoder::encode("12345 123-(0)", 15);
        let slots: Vec<usize> = words.iter().map(|w| w.slot).collect();
        assert_eq!(slots, vec![15, 16, 17]);
        let values: Vec<u32> = words.iter().map(|w| w.codeword.value()).collect();
        assert_eq!(values, vec![0xC261_572C, 0x9C26_5A29, 0xB878_03FF]);
    }

    #[test]
    fn test_encode_empty_text() {
        assert!(MessageEncoder::encode("", 3).is_empty());
    }

    #[test]
    fn test_truncate() {
        let long = "0123456789".repeat(5);
        assert_eq!(MessageEncoder::truncate(&long).len(), 40);
        assert_eq!(MessageEncoder::truncate("123"), "123");
        // Multi-byte characters are counted as one character each
        let wide = "é".repeat(41);
        assert_eq!(MessageEncoder::truncate(&wide).chars().count(), 40);
    }

    #[test]
    fn test_decode_text() {
        let words: Vec<Codeword> = MessageEncoder::encode("12345 123-(0)", 1)
            .into_iter()
            .map(|w| w.codeword)
            .collect();
        assert_eq!(MessageEncoder::decode(&words), "12345 123-(0)00");
    }

    proptest! {
        #[test]
        fn address_codeword_round_trips(addr in 1u32..=0x1F_FFFF, code in prop::sample::select(vec![0u8, 1, 3])) {
            let function = FunctionCode::try_from(code).unwrap();
            let placed = AddressCodewordBuilder::build(Address::new(addr).unwrap(), function);
            // A handful of TimeSync addresses encode to the idle pattern itself
            prop_assume!(placed.codeword != Codeword::IDLE);
            prop_assert!(!placed.codeword.message_flag());
            prop_assert_eq!(placed.slot % 2, 0);
            prop_assert_eq!(AddressCodewordBuilder::decode(placed.codeword), Some((addr >> 3, function)));
            prop_assert!(placed.codeword.has_even_parity());
        }

        #[test]
        fn message_codewords_are_valid(text in "[0-9U* ()\\-]{0,40}") {
            for placed in MessageEncoder::encode(&text, 1) {
                prop_assert!(placed.codeword.message_flag());
                prop_assert!(placed.codeword.has_even_parity());
                prop_assert!(placed.codeword.is_valid());
            }
        }
    }
}
