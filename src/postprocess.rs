//! Output post-processing: bit phase inversion

use crate::batch::Transmission;

/// Post-processor applied to an assembled transmission
///
/// Phase inversion flips every one of the 32 codewords, idle slots
/// included. Byte order is fixed at serialization time by
/// [`Transmission::to_be_bytes`], so no host-order fixup happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostProcessor {
    /// Complement every output word
    pub invert_phase: bool,
}

impl PostProcessor {
    /// Create a post-processor
    pub fn new(invert_phase: bool) -> Self {
        PostProcessor { invert_phase }
    }

    /// Apply post-processing in place
    pub fn apply(&self, transmission: &mut Transmission) {
        if self.invert_phase {
            transmission.batch1.invert();
            transmission.batch2.invert();
            log::debug!("Bit phase inverted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchAssembler;
    use crate::core::{Batch2Policy, Codeword};

    #[test]
    fn test_no_inversion_is_identity() {
        let original = BatchAssembler::new().finish(Batch2Policy::Truncate);
        let mut tx = original;
        PostProcessor::default().apply(&mut tx);
        assert_eq!(tx, original);
    }

    #[test]
    fn test_inversion_flips_all_slots() {
        let mut tx = BatchAssembler::new().finish(Batch2Policy::LeaveIdle);
        PostProcessor::new(true).apply(&mut tx);
        let inverted_idle = Codeword::IDLE.inverted();
        assert!(tx.batch1.codewords().iter().all(|cw| *cw == inverted_idle));
        assert!(tx.batch2.codewords().iter().all(|cw| *cw == inverted_idle));
    }
}
