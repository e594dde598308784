//! Sparse marked-ID tracker with ordered pop-minimum.
//!
//! [`IdTracker`] keeps one [`Block`] per occupied 65536-id range of the
//! identifier space, stored in a [`BTreeMap`] keyed by block index. The
//! map's ascending-key iteration is the load-bearing property: the
//! smallest marked identifier always lives in the lowest-indexed block,
//! so pop-minimum only ever scans the first map entry.
//!
//! Two small pieces of mutable state ride along:
//!
//! - a **scan cursor** caching the offset of the last pop within the
//!   current lowest block, so consecutive pops resume the scan instead of
//!   rescanning from offset 0;
//! - a **monotonicity guard** remembering the last popped identifier, so
//!   a pop that is not strictly greater can be caught as a structural bug
//!   (blocks iterated out of order, stale cursor) rather than silently
//!   passed to the caller.

use std::collections::BTreeMap;

use log::debug;

use crate::block::Block;
use crate::types::{join_id, split_id, Id, BLOCK_SIZE, NOTHING_POPPED, NO_MORE_IDS};

/// Tracks a sparse, growing set of identifiers and drains them in
/// ascending order.
///
/// Not thread-safe: callers needing concurrent access must serialize all
/// calls externally, since block insertion/erasure and the scan cursor
/// are not atomic with respect to each other.
///
/// # Example
///
/// ```
/// use id_tracker::tracker::IdTracker;
/// use id_tracker::types::NO_MORE_IDS;
///
/// let mut tracker = IdTracker::new();
/// tracker.mark(70000);
/// tracker.mark(5);
/// tracker.mark(3);
///
/// assert_eq!(tracker.pop_mark(), 3);
/// assert_eq!(tracker.pop_mark(), 5);
/// assert_eq!(tracker.pop_mark(), 70000);
/// assert_eq!(tracker.pop_mark(), NO_MORE_IDS);
/// ```
#[derive(Debug)]
pub struct IdTracker {
    /// Blocks with at least one marked bit, keyed by block index.
    pending: BTreeMap<Id, Block>,
    /// Cached scan position within the lowest block. Cleared on every
    /// `mark` (the new bit could precede it) and whenever the block it
    /// refers to is erased.
    next_start: Option<usize>,
    /// Last popped identifier. Each pop must exceed it unless a `mark`
    /// intervened, which resets it to `NOTHING_POPPED`.
    old_id: Id,
}

impl IdTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_start: None,
            old_id: NOTHING_POPPED,
        }
    }

    /// Marks `id` as pending. Idempotent.
    ///
    /// Lazily creates the owning block on first mark into its range.
    /// Negative ids are a caller contract violation, checked in debug
    /// builds only.
    pub fn mark(&mut self, id: Id) {
        debug!("mark({})", id);
        let (block_index, offset) = split_id(id);
        self.pending.entry(block_index).or_default().set(offset, true);
        // The new bit may precede the cached scan position.
        self.next_start = None;
        // The marked id may also precede ids already popped, so the next
        // pop is allowed to restart below the previous one.
        self.old_id = NOTHING_POPPED;
    }

    /// Returns whether `id` is currently marked. Pure read.
    pub fn is_marked(&self, id: Id) -> bool {
        let (block_index, offset) = split_id(id);
        self.pending.get(&block_index).map_or(false, |b| b.get(offset))
    }

    /// Removes and returns the smallest marked identifier, or
    /// [`NO_MORE_IDS`] if none remain.
    ///
    /// Successive pops return strictly increasing identifiers unless a
    /// [`mark`][Self::mark] intervenes. A violation means the block map
    /// or cursor got corrupted; it is a `debug_assert!` (compiled out in
    /// release builds, where the cost of the check is not wanted) rather
    /// than a recoverable error, since skipping or reordering would mask
    /// a structural defect.
    pub fn pop_mark(&mut self) -> Id {
        let id = self.pop_min();
        debug_assert!(
            id > self.old_id || id == NO_MORE_IDS,
            "pop_mark returned {} after {}: block map iterated out of order",
            id,
            self.old_id
        );
        self.old_id = id;
        id
    }

    /// The pop-minimum scan over the lowest block.
    fn pop_min(&mut self) -> Id {
        while let Some(mut entry) = self.pending.first_entry() {
            let start = self.next_start.unwrap_or(0);
            let offset = entry.get().next_set_from(start);

            if offset != BLOCK_SIZE {
                entry.get_mut().set(offset, false);
                // The bit at `offset` is now clear, so resuming the next
                // scan at `offset` itself finds the following one.
                self.next_start = Some(offset);
                let id = join_id(*entry.key(), offset);
                debug!("pop_min -> {}", id);
                return id;
            }

            // No set bits left in this block; release it immediately.
            // The cursor is relative to the erased block, so it must go
            // too, and the next block is scanned from offset 0.
            debug!("pop_min: block {} drained, releasing", entry.key());
            entry.remove();
            self.next_start = None;
        }
        debug!("pop_min -> no more ids");
        NO_MORE_IDS
    }

    /// Signals that a batch of pops is durable. No-op extension point.
    pub fn commit(&mut self) {}

    /// Requests early release of resources. No-op extension point; all
    /// blocks are freed eagerly during draining or on drop anyway.
    pub fn force_release(&mut self) {}

    /// Number of currently allocated blocks.
    ///
    /// Observable for memory accounting: peak memory is proportional to
    /// the number of distinct occupied blocks, and this count drops as
    /// draining releases them.
    pub fn block_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether no identifiers are marked.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for IdTracker {
    fn default() -> Self {
        Self::new()
    }
}
