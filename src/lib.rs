//! # LBJ POCSAG Encoder
//!
//! Encodes train proximity alerts (LBJ, TB/T 3504) into POCSAG paging codewords.
//!
//! An alert made of a pager address, a direction/function code and a short
//! numeric text is turned into one or two 16-codeword batches. This library
//! provides:
//!
//! - Address codeword construction with BCH(31,21) check bits and even parity
//! - Numeric (reversed-BCD) message codewords, 5 characters per codeword
//! - Batch assembly with idle-codeword padding and batch 2 disposition
//! - Optional bit phase inversion and big-endian serialization
//!
//! Preamble, synchronisation codewords and modulation belong to the
//! transmitter and are not generated here.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```
//! use lbj_pocsag::{Address, Batch2Policy, EncoderBuilder, FunctionCode};
//!
//! let encoder = EncoderBuilder::new()
//!     .with_batch2_policy(Batch2Policy::Truncate)
//!     .build();
//! let tx = encoder.encode(Address::new(1234567)?, FunctionCode::Up, "12345 123-(0)");
//! assert_eq!(tx.batch_count.get(), 2);
//! let bytes = tx.to_be_bytes();
//! assert_eq!(bytes.len(), 128);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod batch;
pub mod core;
pub mod encoder;
pub mod encoding;
pub mod error;
pub mod message;
pub mod postprocess;
pub mod validator;

pub use crate::batch::{Batch, BatchCount, Transmission};
pub use crate::core::{Address, Batch2Policy, Codeword, CodewordKind, FunctionCode};
pub use crate::encoder::{Encoder, EncoderBuilder, EncoderConfig};
pub use crate::error::{EncodeError, Result};

/// Validate raw parameters and encode an alert
///
/// `function_code` is 0b11 (up), 0b01 (down) or 0b00 (time sync);
/// `batch2_policy` is 0 (truncate), 1 (copy batch 1) or 2 (leave idle).
pub fn encode(
    address: u32,
    function_code: u8,
    text: &str,
    batch2_policy: u8,
    invert_phase: bool,
) -> Result<Transmission> {
    Encoder::encode_raw(address, function_code, text, batch2_policy, invert_phase)
}

/// POCSAG and LBJ protocol constants
pub mod spec {
    /// Reserved idle codeword
    pub const IDLE_CODEWORD: u32 = 0x7A89_C197;

    /// BCH(31,21) generator polynomial, left aligned
    pub const BCH_GENERATOR: u32 = 0xED20_0000;

    /// Mask of the 21 data bits (type flag and payload)
    pub const DATA_MASK: u32 = 0xFFFF_F800;

    /// Codewords per batch
    pub const BATCH_LEN: usize = 16;

    /// Codeword slots per frame
    pub const CODEWORDS_PER_FRAME: usize = 2;

    /// Slots across both batches
    pub const TOTAL_SLOTS: usize = BATCH_LEN * 2;

    /// Maximum message length in characters
    pub const MAX_TEXT_LEN: usize = 40;

    /// Numeric characters per message codeword
    pub const CHARS_PER_CODEWORD: usize = 5;
}
