//! High-level encoder turning an alert into POCSAG batches

use crate::batch::{BatchAssembler, Transmission};
use crate::core::{Address, Batch2Policy, FunctionCode};
use crate::error::Result;
use crate::message::{AddressCodewordBuilder, MessageEncoder};
use crate::postprocess::PostProcessor;
use crate::validator::ParameterValidator;

/// Encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncoderConfig {
    /// What to do with batch 2 when the message fits in batch 1
    pub batch2_policy: Batch2Policy,
    /// Complement every output word for inverted-phase transmitters
    pub invert_phase: bool,
}

/// LBJ alert encoder
///
/// Every call builds its batches from scratch, so one encoder can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    /// Current settings
    pub config: EncoderConfig,
}

impl Encoder {
    /// Create a new encoder
    pub fn new(config: EncoderConfig) -> Self {
        Encoder { config }
    }

    /// Encode an alert
    ///
    /// Text longer than 40 characters is clamped.
    pub fn encode(&self, address: Address, function: FunctionCode, text: &str) -> Transmission {
        log::trace!("Encoding alert for address {} ({})", address, function);
        let text = MessageEncoder::truncate(text);

        let address_cw = AddressCodewordBuilder::build(address, function);
        let mut assembler = BatchAssembler::new();
        assembler.place(address_cw);
        assembler.place_all(MessageEncoder::encode(text, address_cw.slot + 1));

        let mut transmission = assembler.finish(self.config.batch2_policy);
        PostProcessor::new(self.config.invert_phase).apply(&mut transmission);
        transmission
    }

    /// Validate raw parameters and encode an alert
    ///
    /// The address, function code and policy are checked in that order
    /// before anything is computed.
    pub fn encode_raw(
        address: u32,
        function_code: u8,
        text: &str,
        batch2_policy: u8,
        invert_phase: bool,
    ) -> Result<Transmission> {
        let params = ParameterValidator::validate(address, function_code, batch2_policy)?;
        let encoder = EncoderBuilder::new()
            .with_batch2_policy(params.batch2_policy)
            .with_phase_inversion(invert_phase)
            .build();
        Ok(encoder.encode(params.address, params.function, text))
    }
}

/// Builder for an [`Encoder`]
pub struct EncoderBuilder {
    config: EncoderConfig,
}

impl EncoderBuilder {
    /// Create a new encoder builder
    pub fn new() -> Self {
        EncoderBuilder {
            config: EncoderConfig::default(),
        }
    }

    /// Set the batch 2 policy
    pub fn with_batch2_policy(mut self, policy: Batch2Policy) -> Self {
        self.config.batch2_policy = policy;
        self
    }

    /// Enable or disable phase inversion
    pub fn with_phase_inversion(mut self, invert: bool) -> Self {
        self.config.invert_phase = invert;
        self
    }

    /// Build the encoder
    pub fn build(self) -> Encoder {
        Encoder::new(self.config)
    }
}

impl Default for EncoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
