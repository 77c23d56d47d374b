#![warn(missing_docs)]

//! # Reuse-distance profiling over order-statistic search trees
//!
//! The *reuse distance* of an access in a stream is the number of distinct
//! symbols touched since the previous access to the same symbol (or -1 if
//! the symbol is new).  It is the classical input to cache and working-set
//! analysis: an access with reuse distance `d` hits in any LRU cache that
//! holds more than `d` entries.
//!
//! Computed naively, the histogram of all reuse distances in a stream costs
//! O(N²).  This crate computes it in a single O(N log N) pass by keeping
//! the currently-live symbols in a balanced search tree keyed by their
//! last-use time, where every node also records the size of its subtree.
//! "How many distinct symbols since time `t`?" then becomes "how many keys
//! are greater than `t`?", which the size fields answer in O(log n).
//!
//! Two interchangeable backends implement the [`OrderedSet`] surface:
//!
//! * [`TreapSet`], a treap: expected O(log n) via random heap priorities.
//! * [`RbSet`], a red-black tree: worst-case O(log n), deterministic.
//!
//! Both store their nodes in a slot arena and link them with plain integer
//! handles, so a steady insert/remove workload recycles slots through a
//! free-list and performs no heap allocation after warm-up.
//!
//! ```
//! use reuse_distance::{reuse_histogram, FIRST_SIGHT};
//!
//! let hist = reuse_histogram([5, 2, 7, 5, 2]);
//! assert_eq!(hist[&FIRST_SIGHT], 3); // 5, 2, 7 are new
//! assert_eq!(hist[&2], 2); // both reuses skip two distinct symbols
//! ```

mod arena;
pub mod rbtree;
pub mod reuse;
pub mod treap;

pub use rbtree::RbSet;
pub use reuse::{reuse_histogram, reuse_histogram_in, Histogram, ReuseProfiler, FIRST_SIGHT};
pub use treap::TreapSet;

/// The ordered-set surface shared by the tree backends.
///
/// Keys must be small, trivially-copyable, totally-ordered values; in
/// practice integers or pairs of integers.  Every operation is total: a
/// duplicate insert or an absent-key remove reports `false` rather than
/// failing.
pub trait OrderedSet<K: Copy + Ord> {
    /// Returns the number of keys in the set.
    fn len(&self) -> usize;

    /// Returns true if the set holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tests if the set contains the given key.
    fn contains(&self, key: K) -> bool;

    /// Inserts the given key and returns true if it was not already present.
    fn insert(&mut self, key: K) -> bool;

    /// Removes the given key and returns true if it was present.
    fn remove(&mut self, key: K) -> bool;

    /// Returns the number of stored keys strictly greater than `key`.
    ///
    /// `key` itself need not be present.
    fn count_greater(&self, key: K) -> usize;

    /// Checks every structural invariant of the backend.  Intended for
    /// tests and debugging; a `false` here is a bug in the engine.
    fn validate(&self) -> bool;
}
