//! Fixed-size packed bit block.
//!
//! A [`Block`] records presence or absence of [`BLOCK_SIZE`] consecutive
//! identifiers as [`WORDS_PER_BLOCK`] packed `u32` words. Packing 32 bits
//! per word lets [`next_set_from`][Block::next_set_from] skip a whole run
//! of 32 unset positions with a single comparison, which is what makes
//! repeated pop-minimum scans cheap.

use crate::types::{BLOCK_SIZE, WORDS_PER_BLOCK, WORD_BITS};

/// A fixed-capacity bit array covering one block of the ID space.
///
/// The backing storage is allocated at full size on construction and never
/// resized. A block holding no set bits is indistinguishable from a fresh
/// one; the tracker erases such blocks from its map instead of keeping
/// them around.
#[derive(Debug, Clone)]
pub struct Block {
    /// Storage: each u32 holds 32 bits.
    words: Box<[u32]>,
}

impl Block {
    /// Creates a new block with all bits clear.
    pub fn new() -> Self {
        Self {
            words: vec![0; WORDS_PER_BLOCK].into_boxed_slice(),
        }
    }

    /// Returns whether the bit at `offset` is set.
    #[inline]
    pub fn get(&self, offset: usize) -> bool {
        debug_assert!(offset < BLOCK_SIZE);
        let mask = 1u32 << (offset % WORD_BITS);
        (self.words[offset / WORD_BITS] & mask) != 0
    }

    /// Sets or clears the bit at `offset`.
    #[inline]
    pub fn set(&mut self, offset: usize, value: bool) {
        debug_assert!(offset < BLOCK_SIZE);
        let word = &mut self.words[offset / WORD_BITS];
        let mask = 1u32 << (offset % WORD_BITS);
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Finds the next set bit, scanning forward from `start`.
    ///
    /// Returns [`BLOCK_SIZE`] if no set bit remains.
    ///
    /// The scan has word granularity: it begins at the word containing
    /// `start`, skips all-zero words, and returns the lowest set bit of
    /// the first non-zero word. Callers must ensure that every bit below
    /// `start` within its own word is already clear, or the scan may
    /// return a position before `start`. The tracker's pop loop maintains
    /// this naturally: the cursor always points at a bit it just cleared,
    /// and everything below it was cleared by earlier pops.
    pub fn next_set_from(&self, start: usize) -> usize {
        debug_assert!(start <= BLOCK_SIZE);
        let mut word_idx = start / WORD_BITS;

        while word_idx < WORDS_PER_BLOCK && self.words[word_idx] == 0 {
            word_idx += 1;
        }

        if word_idx == WORDS_PER_BLOCK {
            return BLOCK_SIZE;
        }
        word_idx * WORD_BITS + self.words[word_idx].trailing_zeros() as usize
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}
