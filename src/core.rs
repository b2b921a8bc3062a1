//! Core types and structures for LBJ POCSAG encoding

use crate::error::{EncodeError, Result};
use crate::spec;
use bitfield::bitfield;

/// Pager address (1 to 0x1FFFFF)
///
/// The low 3 bits select the frame the address codeword is sent in, the
/// remaining 18 bits travel inside the codeword itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(u32);

impl Address {
    /// Minimum address value
    pub const MIN: u32 = 1;
    /// Maximum address value (21 bits)
    pub const MAX: u32 = 0x1F_FFFF;

    /// Create a new address, validating it's within range [1, 0x1FFFFF]
    pub fn new(addr: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&addr) {
            return Err(EncodeError::invalid_address(format!(
                "Address {:#X} out of range [{:#X}, {:#X}]",
                addr,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Address(addr))
    }

    /// Get the raw address value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Frame number (0-7) taken from the low 3 bits
    pub fn frame(&self) -> u8 {
        (self.0 & 0x7) as u8
    }

    /// The 18 address bits carried in the address codeword
    pub fn pager_bits(&self) -> u32 {
        self.0 >> 3
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (frame {})", self.0, self.frame())
    }
}

/// Function code of an LBJ alert, carried in the 2 function bits of the
/// address codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionCode {
    /// Train running in the up direction
    Up = 0b11,
    /// Train running in the down direction
    Down = 0b01,
    /// Clock synchronisation message
    TimeSync = 0b00,
}

impl FunctionCode {
    /// Get the 2-bit representation
    pub fn bits(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for FunctionCode {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0b11 => Ok(FunctionCode::Up),
            0b01 => Ok(FunctionCode::Down),
            0b00 => Ok(FunctionCode::TimeSync),
            _ => Err(EncodeError::invalid_function_code(format!(
                "Unknown function code: {}",
                value
            ))),
        }
    }
}

impl std::fmt::Display for FunctionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionCode::Up => write!(f, "Up"),
            FunctionCode::Down => write!(f, "Down"),
            FunctionCode::TimeSync => write!(f, "Time Sync"),
        }
    }
}

/// What to do with batch 2 when the message fits entirely in batch 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Batch2Policy {
    /// Only batch 1 is emitted
    #[default]
    Truncate = 0,
    /// Batch 2 repeats batch 1
    CopyBatch1 = 1,
    /// Batch 2 is kept as idle codewords
    LeaveIdle = 2,
}

impl TryFrom<u8> for Batch2Policy {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Batch2Policy::Truncate),
            1 => Ok(Batch2Policy::CopyBatch1),
            2 => Ok(Batch2Policy::LeaveIdle),
            _ => Err(EncodeError::invalid_batch2_policy(format!(
                "Unknown batch 2 policy: {}",
                value
            ))),
        }
    }
}

impl std::fmt::Display for Batch2Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Batch2Policy::Truncate => write!(f, "Truncate"),
            Batch2Policy::CopyBatch1 => write!(f, "Copy Batch 1"),
            Batch2Policy::LeaveIdle => write!(f, "Leave Idle"),
        }
    }
}

/// Kind of a POCSAG codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodewordKind {
    /// Address codeword (type flag 0)
    Address,
    /// Message codeword (type flag 1)
    Message,
    /// The reserved idle filler
    Idle,
}

impl std::fmt::Display for CodewordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodewordKind::Address => write!(f, "Address"),
            CodewordKind::Message => write!(f, "Message"),
            CodewordKind::Idle => write!(f, "Idle"),
        }
    }
}

bitfield! {
    /// A single 32-bit POCSAG codeword
    ///
    /// Format:
    /// - Bit 31: type flag (0 = address, 1 = message)
    /// - Bits 30-11: 20-bit payload
    /// - Bits 10-1: BCH(31,21) check field
    /// - Bit 0: even parity over the whole word
    ///
    /// For address codewords the payload splits into 18 address bits
    /// (30-13) and 2 function bits (12-11).
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Codeword(u32);
    impl Debug;
    /// Type flag, set for message codewords
    pub message_flag, _: 31;
    /// 20-bit payload
    pub u32, payload, _: 30, 11;
    /// 18 address bits of an address codeword
    pub u32, address_bits, _: 30, 13;
    /// Function bits of an address codeword
    pub u8, function_bits, _: 12, 11;
    /// BCH(31,21) check field
    pub u16, check_bits, _: 10, 1;
    /// Even parity bit
    pub parity_bit, _: 0;
}

impl Codeword {
    /// The reserved idle codeword
    pub const IDLE: Codeword = Codeword(spec::IDLE_CODEWORD);

    /// Wrap a raw 32-bit value
    pub fn from_raw(value: u32) -> Self {
        Codeword(value)
    }

    /// Get the raw 32-bit value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Classify the codeword
    pub fn kind(&self) -> CodewordKind {
        if self.0 == spec::IDLE_CODEWORD {
            CodewordKind::Idle
        } else if self.message_flag() {
            CodewordKind::Message
        } else {
            CodewordKind::Address
        }
    }

    /// Whether the word carries an even number of set bits
    pub fn has_even_parity(&self) -> bool {
        self.0.count_ones() % 2 == 0
    }

    /// Whether check field and parity bit match the top 21 bits
    pub fn is_valid(&self) -> bool {
        crate::encoding::BchEncoder::encode(self.0 & spec::DATA_MASK) == self.0
    }

    /// The bitwise complement of this codeword
    pub fn inverted(&self) -> Self {
        Codeword(!self.0)
    }

    /// Serialize in transmission (big-endian) byte order
    pub fn to_be_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl Default for Codeword {
    fn default() -> Self {
        Codeword::IDLE
    }
}

impl std::fmt::Display for Codeword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}
