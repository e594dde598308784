//! Identifier type, sentinels, and block geometry.
//!
//! The tracked ID space is partitioned into fixed-size blocks of
//! `BLOCK_SIZE` consecutive identifiers. An identifier decomposes into a
//! *block index* (its high bits) selecting the owning block, and an
//! *intra-block offset* (its low bits) selecting a bit within that block.
//!
//! # Tuning
//!
//! `BLOCK_BITS` and `WORD_BITS` trade space for speed: larger blocks
//! amortize map overhead when marked IDs cluster densely, but waste memory
//! when they are widely scattered, since each touched block allocates all
//! `BLOCK_SIZE / 8` bytes up front. The defaults (65536-bit blocks of
//! packed 32-bit words) suit ID sets that cluster locally.

/// An identifier in the tracked ID space.
///
/// Identifiers are opaque to the tracker; it attaches no meaning to them
/// beyond their numeric order. They must be non-negative: the extremes of
/// the signed range are reserved as sentinels.
pub type Id = i64;

/// Sentinel returned by [`pop_mark`][crate::tracker::IdTracker::pop_mark]
/// when no marked identifiers remain.
pub const NO_MORE_IDS: Id = Id::MAX;

/// Baseline of the monotonicity guard: no identifier popped yet.
pub const NOTHING_POPPED: Id = Id::MIN;

/// Number of low identifier bits addressing a position within one block.
pub const BLOCK_BITS: u32 = 16;

/// Number of consecutive identifiers covered by one block.
pub const BLOCK_SIZE: usize = 1 << BLOCK_BITS;

/// Mask extracting the intra-block offset from an identifier.
pub const BLOCK_MASK: Id = (BLOCK_SIZE - 1) as Id;

/// Bits per packed storage word.
pub const WORD_BITS: usize = 32;

/// Packed words per block.
pub const WORDS_PER_BLOCK: usize = BLOCK_SIZE / WORD_BITS;

/// Splits an identifier into `(block index, intra-block offset)`.
///
/// Negative identifiers are a caller contract violation, checked only in
/// debug builds.
#[inline]
pub fn split_id(id: Id) -> (Id, usize) {
    debug_assert!(id >= 0, "identifier {} is negative", id);
    (id >> BLOCK_BITS, (id & BLOCK_MASK) as usize)
}

/// Reassembles an identifier from a block index and intra-block offset.
#[inline]
pub fn join_id(block_index: Id, offset: usize) -> Id {
    debug_assert!(offset < BLOCK_SIZE);
    (block_index << BLOCK_BITS) | offset as Id
}
