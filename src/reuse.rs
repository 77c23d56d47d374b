//! Streaming reuse-distance histograms.
//!
//! The reuse distance of an access is the number of *distinct* symbols
//! touched since the previous access to the same symbol, or -1 on first
//! sight.  The profiler keeps one `(time, symbol)` entry per currently-live
//! symbol in an [`OrderedSet`], keyed by the symbol's last use.  Every
//! other live symbol was last used at a different time, so the number of
//! distinct symbols touched since time `t` is exactly the number of
//! entries greater than `(t, s)`.  One `count_greater` per access, and the
//! whole stream costs O(N log N) instead of the O(N²) of rescanning.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::{OrderedSet, TreapSet};

/// A reuse-distance histogram: distance to number of accesses, with
/// [`FIRST_SIGHT`] standing in for first sightings.
pub type Histogram = BTreeMap<i64, u64>;

/// The distance recorded for a symbol's first access.
pub const FIRST_SIGHT: i64 = -1;

/// Accumulates a reuse-distance histogram over a stream of accesses.
///
/// The backend defaults to [`TreapSet`]; any [`OrderedSet`] over
/// `(u64, T)` keys works.
///
/// # Examples
/// ```
/// use reuse_distance::ReuseProfiler;
///
/// let mut profiler: ReuseProfiler<char> = ReuseProfiler::new();
/// assert_eq!(profiler.observe('x'), -1);
/// assert_eq!(profiler.observe('y'), -1);
/// assert_eq!(profiler.observe('x'), 1); // skipped over y
/// ```
pub struct ReuseProfiler<T, S = TreapSet<(u64, T)>> {
    live: S,
    last: HashMap<T, u64>,
    hist: Histogram,
    clock: u64,
}

impl<T, S> ReuseProfiler<T, S>
where
    T: Copy + Ord + Hash,
    S: OrderedSet<(u64, T)> + Default,
{
    /// Returns a profiler with an empty history.
    pub fn new() -> Self {
        Self {
            live: S::default(),
            last: HashMap::new(),
            hist: Histogram::new(),
            clock: 0,
        }
    }

    /// Feeds one access and returns the reuse distance it recorded.
    pub fn observe(&mut self, symbol: T) -> i64 {
        let distance = match self.last.get(&symbol).copied() {
            Some(prev) => {
                let key = (prev, symbol);
                let d = self.live.count_greater(key) as i64;
                self.live.remove(key);
                d
            }
            None => FIRST_SIGHT,
        };
        *self.hist.entry(distance).or_insert(0) += 1;
        self.live.insert((self.clock, symbol));
        self.last.insert(symbol, self.clock);
        self.clock += 1;
        distance
    }

    /// The histogram accumulated so far.
    pub fn histogram(&self) -> &Histogram {
        &self.hist
    }

    /// Consumes the profiler, returning the histogram.
    pub fn into_histogram(self) -> Histogram {
        self.hist
    }

    /// The number of accesses observed so far.
    pub fn accesses(&self) -> u64 {
        self.clock
    }

    /// The number of distinct symbols seen so far.
    pub fn distinct_symbols(&self) -> usize {
        self.live.len()
    }
}

impl<T, S> Default for ReuseProfiler<T, S>
where
    T: Copy + Ord + Hash,
    S: OrderedSet<(u64, T)> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the reuse-distance histogram of a sequence in one pass over
/// the treap backend.
///
/// # Examples
/// ```
/// use reuse_distance::reuse_histogram;
///
/// let hist = reuse_histogram("abcabc".chars());
/// assert_eq!(hist[&-1], 3); // a, b, c are first sightings
/// assert_eq!(hist[&2], 3);  // each reuse skips the other two symbols
/// ```
pub fn reuse_histogram<T, I>(input: I) -> Histogram
where
    T: Copy + Ord + Hash,
    I: IntoIterator<Item = T>,
{
    reuse_histogram_in::<TreapSet<(u64, T)>, T, I>(input)
}

/// Same as [`reuse_histogram`], but over a caller-chosen backend.
pub fn reuse_histogram_in<S, T, I>(input: I) -> Histogram
where
    T: Copy + Ord + Hash,
    S: OrderedSet<(u64, T)> + Default,
    I: IntoIterator<Item = T>,
{
    let mut profiler = ReuseProfiler::<T, S>::new();
    for symbol in input {
        profiler.observe(symbol);
    }
    profiler.into_histogram()
}
