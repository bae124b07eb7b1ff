//! Shared comparison helpers.
//!
//! Every algorithm in this crate is parameterized over a three-way
//! comparator `FnMut(&T, &T) -> Ordering`, with a companion method that
//! defaults to the natural order of `T: Ord`. This module holds the small
//! toolbox for building such comparators (reversal, key projection) and for
//! checking the sortedness precondition the algorithms themselves never
//! verify.

use std::cmp::Ordering;

/// Returns `true` if `slice` is non-decreasing under `compare`.
///
/// Equal neighbours are allowed; the algorithms in this crate accept
/// duplicates and this check does too. An empty or single-element slice is
/// trivially sorted.
///
/// The crate's algorithms trust their inputs instead of calling this; it is
/// provided for callers who want to validate data at a boundary before
/// handing it over.
///
/// # Complexity
///
/// O(n) comparisons.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use ordseq::compare::is_sorted_by;
///
/// let ascending = [1, 2, 2, 3];
/// assert!(is_sorted_by(&ascending, i32::cmp));
///
/// let descending = [3, 2, 1];
/// assert!(!is_sorted_by(&descending, i32::cmp));
/// assert!(is_sorted_by(&descending, |left, right| right.cmp(left)));
/// ```
#[must_use]
pub fn is_sorted_by<T, F>(slice: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    slice
        .windows(2)
        .all(|window| compare(&window[0], &window[1]) != Ordering::Greater)
}

/// Returns `true` if `slice` is non-decreasing under the natural order.
///
/// # Examples
///
/// ```rust
/// use ordseq::compare::is_sorted;
///
/// assert!(is_sorted(&[1, 1, 2, 3]));
/// assert!(!is_sorted(&[2, 1]));
/// ```
#[must_use]
pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    is_sorted_by(slice, T::cmp)
}

/// Wraps a comparator so that it reports the opposite ordering.
///
/// Useful for running the merge algorithms over descending sequences: two
/// descending inputs and `reverse(T::cmp)` behave exactly like ascending
/// inputs under `T::cmp`.
///
/// # Examples
///
/// ```rust
/// use ordseq::compare::{is_sorted_by, reverse};
///
/// let descending = [9, 7, 4, 1];
/// assert!(is_sorted_by(&descending, reverse(i32::cmp)));
/// ```
pub fn reverse<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |left, right| compare(left, right).reverse()
}

/// Builds a comparator that orders values by a projected key.
///
/// The key is recomputed on every comparison, so keep the projection cheap
/// (a field access or a copy) when the comparator sits inside a merge loop.
///
/// # Examples
///
/// ```rust
/// use ordseq::compare::{by_key, is_sorted_by};
///
/// let words = ["a", "to", "the"];
/// assert!(is_sorted_by(&words, by_key(|word: &&str| word.len())));
/// ```
pub fn by_key<T, K, F>(mut key: F) -> impl FnMut(&T, &T) -> Ordering
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |left, right| key(left).cmp(&key(right))
}

/// Builds a comparator from a key projection and a comparator on the keys.
///
/// The fully general form of [`by_key`], for keys whose order is itself
/// caller-defined.
///
/// # Examples
///
/// ```rust
/// use ordseq::compare::{by_key_cmp, is_sorted_by, reverse};
///
/// let words = ["the", "to", "a"];
/// let by_descending_length = by_key_cmp(|word: &&str| word.len(), reverse(usize::cmp));
/// assert!(is_sorted_by(&words, by_descending_length));
/// ```
pub fn by_key_cmp<T, K, F, C>(mut key: F, mut compare: C) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    move |left, right| compare(&key(left), &key(right))
}
