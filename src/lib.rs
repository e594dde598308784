//! # id-tracker: sparse ID marking with ordered draining
//!
//! **`id-tracker`** tracks a sparse, growing set of large integer
//! identifiers that have been *marked* for later processing, and extracts
//! them one at a time in ascending order, removing each as it goes.
//!
//! ## Why not a plain bit vector or a `BTreeSet`?
//!
//! The target workload is identifiers that are numerically huge and
//! sparse overall, but cluster locally (object IDs from an external
//! dataset, say). A dense bit vector over the whole ID space wastes
//! memory on the gaps; a per-ID tree or hash set wastes memory on the
//! clusters. `id-tracker` splits the difference: the ID space is
//! partitioned into 65536-id blocks, each occupied block is one packed
//! bit array, and an ordered map holds only the occupied blocks. A scan
//! cursor caches the position of the last pop so a drain does not rescan
//! each block from the start.
//!
//! ## Basic Usage
//!
//! ```rust
//! use id_tracker::tracker::IdTracker;
//! use id_tracker::types::NO_MORE_IDS;
//!
//! let mut tracker = IdTracker::new();
//!
//! // Mark identifiers in any order, duplicates allowed.
//! tracker.mark(70000);
//! tracker.mark(5);
//! tracker.mark(3);
//! tracker.mark(70000);
//!
//! assert!(tracker.is_marked(5));
//! assert!(!tracker.is_marked(4));
//!
//! // Drain in ascending order; each id comes out exactly once.
//! assert_eq!(tracker.pop_mark(), 3);
//! assert_eq!(tracker.pop_mark(), 5);
//! assert_eq!(tracker.pop_mark(), 70000);
//! assert_eq!(tracker.pop_mark(), NO_MORE_IDS);
//! ```
//!
//! ## Core Components
//!
//! - **[`tracker`]**: the [`IdTracker`][crate::tracker::IdTracker] with
//!   `mark` / `is_marked` / `pop_mark` and the monotonicity guard.
//! - **[`block`]**: the fixed-size packed bit block with its forward scan.
//! - **[`types`]**: the identifier type, sentinels, and block geometry.
//!
//! Single-threaded by design: wrap the tracker in a mutex if you need to
//! share it across threads.

pub mod block;
pub mod tracker;
pub mod types;
