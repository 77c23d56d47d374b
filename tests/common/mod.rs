#![allow(dead_code)]

use proptest::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;

/// Asserts that every expression evaluates to the same value.
#[macro_export]
macro_rules! assert_eq_all {
    ( $first:expr, $( $rest:expr ),+ $(,)? ) => {{
        let first = &$first;
        $( assert_eq!(first, &$rest); )+
    }};
}

pub(super) fn assert_eq_iters<I: Iterator, J: Iterator<Item = I::Item>>(mut i: I, mut j: J)
where
    I::Item: std::fmt::Debug + Eq, // same inferred for J::Item
{
    loop {
        match (i.next(), j.next()) {
            (None, None) => return,
            (a, b) => assert_eq!(a, b),
        }
    }
}

pub(super) type U16Seq = Vec<u16>;

pub(super) fn u16_seq(max: u16, len: usize) -> impl Strategy<Value = U16Seq> {
    prop::collection::vec(0..max, 0..len)
}

pub(super) fn small_int_seq() -> impl Strategy<Value = U16Seq> {
    prop::collection::vec(0u16..1024u16, 0..512)
}

// O(N^2) reference for the reuse-distance pipeline: for each access, scan
// back to the previous occurrence of the symbol and count the distinct
// symbols strictly between the two.
pub(super) fn naive_histogram<T>(input: &[T]) -> reuse_distance::Histogram
where
    T: Copy + Eq + Hash,
{
    let mut hist = reuse_distance::Histogram::new();
    for (t, s) in input.iter().enumerate() {
        let d = match input[..t].iter().rposition(|x| x == s) {
            Some(p) => {
                let between: HashSet<&T> = input[p + 1..t].iter().collect();
                between.len() as i64
            }
            None => reuse_distance::FIRST_SIGHT,
        };
        *hist.entry(d).or_insert(0) += 1;
    }
    hist
}
