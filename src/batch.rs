//! Batch assembly of address and message codewords

use crate::core::{Batch2Policy, Codeword};
use crate::message::PlacedCodeword;
use crate::spec;

/// 16 consecutive codewords (8 frames of 2 codewords each)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Batch {
    words: [Codeword; spec::BATCH_LEN],
}

impl Batch {
    /// A batch filled with idle codewords
    pub fn idle() -> Self {
        Batch {
            words: [Codeword::IDLE; spec::BATCH_LEN],
        }
    }

    /// Codewords in transmission order
    pub fn codewords(&self) -> &[Codeword; spec::BATCH_LEN] {
        &self.words
    }

    /// Raw 32-bit values in transmission order
    pub fn words(&self) -> [u32; spec::BATCH_LEN] {
        self.words.map(|cw| cw.value())
    }

    /// Get the codeword at `slot` (0-15)
    pub fn get(&self, slot: usize) -> Option<Codeword> {
        self.words.get(slot).copied()
    }

    /// Whether every slot holds the idle codeword
    pub fn is_idle(&self) -> bool {
        self.words.iter().all(|cw| *cw == Codeword::IDLE)
    }

    pub(crate) fn set(&mut self, slot: usize, codeword: Codeword) {
        self.words[slot] = codeword;
    }

    pub(crate) fn invert(&mut self) {
        for cw in self.words.iter_mut() {
            *cw = cw.inverted();
        }
    }

    /// Serialize the batch with each codeword in big-endian byte order
    pub fn to_be_bytes(&self) -> [u8; spec::BATCH_LEN * 4] {
        let mut bytes = [0u8; spec::BATCH_LEN * 4];
        for (chunk, cw) in bytes.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&cw.to_be_bytes());
        }
        bytes
    }
}

impl Default for Batch {
    fn default() -> Self {
        Self::idle()
    }
}

impl std::ops::Index<usize> for Batch {
    type Output = Codeword;

    fn index(&self, slot: usize) -> &Codeword {
        &self.words[slot]
    }
}

/// Number of batches that carry meaningful data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BatchCount {
    /// Only batch 1 is meaningful
    One = 1,
    /// Both batches are meaningful
    Two = 2,
}

impl BatchCount {
    /// Get the count as a number
    pub fn get(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for BatchCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The encoded alert: one or two batches ready for transmission
///
/// Both batches are always present; `batch_count` says how many of them
/// the transmitter should send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transmission {
    /// Number of batches to transmit
    pub batch_count: BatchCount,
    /// First batch
    pub batch1: Batch,
    /// Second batch
    pub batch2: Batch,
}

impl Transmission {
    /// The batches to send, in order
    pub fn emitted_batches(&self) -> impl Iterator<Item = &Batch> {
        [&self.batch1, &self.batch2]
            .into_iter()
            .take(self.batch_count.get())
    }

    /// Big-endian serialization of the emitted batches (64 or 128 bytes)
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.emitted_batches()
            .flat_map(|batch| batch.to_be_bytes())
            .collect()
    }

    /// Big-endian serialization of both batches regardless of `batch_count`
    pub fn all_be_bytes(&self) -> [u8; spec::BATCH_LEN * 8] {
        let mut bytes = [0u8; spec::BATCH_LEN * 8];
        let (first, second) = bytes.split_at_mut(spec::BATCH_LEN * 4);
        first.copy_from_slice(&self.batch1.to_be_bytes());
        second.copy_from_slice(&self.batch2.to_be_bytes());
        bytes
    }
}

/// Places codewords into two idle-filled batches
#[derive(Debug, Clone)]
pub struct BatchAssembler {
    batches: [Batch; 2],
    last_slot: usize,
}

impl BatchAssembler {
    /// Create an assembler with both batches idle
    pub fn new() -> Self {
        BatchAssembler {
            batches: [Batch::idle(), Batch::idle()],
            last_slot: 0,
        }
    }

    /// Put a codeword at its absolute slot
    ///
    /// Slots past 31 are dropped.
    pub fn place(&mut self, placed: PlacedCodeword) {
        self.last_slot = self.last_slot.max(placed.slot);
        if placed.slot >= spec::TOTAL_SLOTS {
            log::debug!("Dropped codeword {} past slot {}", placed.codeword, placed.slot);
            return;
        }
        let batch = placed.slot / spec::BATCH_LEN;
        let index = placed.slot % spec::BATCH_LEN;
        self.batches[batch].set(index, placed.codeword);
        log::debug!(
            "Stuffed batch {}[{}] with {} ({:032b}b)",
            batch + 1,
            placed.slot,
            placed.codeword,
            placed.codeword.value()
        );
    }

    /// Put a sequence of codewords at their slots
    pub fn place_all(&mut self, placed: impl IntoIterator<Item = PlacedCodeword>) {
        for item in placed {
            self.place(item);
        }
    }

    /// Highest slot index used so far
    pub fn last_slot(&self) -> usize {
        self.last_slot
    }

    /// Apply the batch 2 policy and produce the transmission
    pub fn finish(self, policy: Batch2Policy) -> Transmission {
        let [batch1, mut batch2] = self.batches;
        let batch_count = if self.last_slot >= spec::BATCH_LEN {
            BatchCount::Two
        } else {
            match policy {
                Batch2Policy::Truncate => BatchCount::One,
                Batch2Policy::CopyBatch1 => {
                    batch2 = batch1;
                    BatchCount::Two
                }
                Batch2Policy::LeaveIdle => BatchCount::One,
            }
        };
        Transmission {
            batch_count,
            batch1,
            batch2,
        }
    }
}

impl Default for BatchAssembler {
    fn default() -> Self {
        Self::new()
    }
}
