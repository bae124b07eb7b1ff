//! Lazy set algebra over sorted sequences.
//!
//! This module provides iterator adapters that combine two sorted sequences
//! by walking a cursor over each and comparing the current elements:
//!
//! - [`Difference`]: elements of the left sequence with no counterpart on
//!   the right
//! - [`Intersect`]: elements present on both sides
//! - [`Union`]: every element of both sides, emitting shared elements once
//! - [`Distinct`]: a single sequence with adjacent duplicates collapsed
//!
//! All four are created through the [`SortedSequence`] extension trait,
//! which is implemented for everything that converts into an iterator.
//! Each operation comes in two flavours: a `_by` variant taking an explicit
//! three-way comparator, and a plain variant using the natural order of
//! `T: Ord`.
//!
//! # Duplicate Handling
//!
//! The adapters treat their inputs as multisets. With `k1` copies of a
//! value on the left and `k2` on the right, the output carries
//! `max(k1 - k2, 0)` copies for difference, `min(k1, k2)` for intersection,
//! and `max(k1, k2)` for union. [`Distinct`] is the odd one out: it always
//! collapses a run of equal elements to its first member.
//!
//! # Laziness
//!
//! Constructing an adapter does no work and consumes no input. Elements are
//! pulled from the underlying iterators only as the adapter itself is
//! polled, and each input element is looked at exactly once. The adapters
//! are therefore single-pass values like any other iterator: to run two
//! operations over the same data, build two adapters.
//!
//! # Preconditions
//!
//! Both inputs must already be non-decreasing under the comparator in use,
//! and both must use the *same* comparator. This is trusted, never checked;
//! unsorted input yields unspecified (but safe) output. See
//! [`crate::compare::is_sorted_by`] for an explicit check.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::merge::SortedSequence;
//!
//! let left = [1, 2, 4, 6];
//! let right = [2, 3, 6];
//!
//! let difference: Vec<i32> = left.difference(right).collect();
//! assert_eq!(difference, vec![1, 4]);
//!
//! let intersection: Vec<i32> = left.intersect(right).collect();
//! assert_eq!(intersection, vec![2, 6]);
//!
//! let union: Vec<i32> = left.union(right).collect();
//! assert_eq!(union, vec![1, 2, 3, 4, 6]);
//! ```
//!
//! Descending data works with a reversed comparator:
//!
//! ```rust
//! use ordseq::compare::reverse;
//! use ordseq::merge::SortedSequence;
//!
//! let left = [9, 6, 2];
//! let right = [6, 1];
//!
//! let union: Vec<i32> = left.union_by(right, reverse(i32::cmp)).collect();
//! assert_eq!(union, vec![9, 6, 2, 1]);
//! ```

use std::cmp::Ordering;

mod difference;
mod distinct;
mod intersect;
mod union;

pub use difference::Difference;
pub use distinct::Distinct;
pub use intersect::Intersect;
pub use union::Union;

/// Function-pointer comparator used by the natural-order method variants.
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Function-pointer equality predicate used by [`SortedSequence::distinct`].
pub type NaturalEquality<T> = fn(&T, &T) -> bool;

// =============================================================================
// Extension Trait
// =============================================================================

/// Extension methods for sequences that are already sorted.
///
/// Implemented for every `IntoIterator`, so arrays, slices, `Vec`s, ranges,
/// and arbitrary iterators all gain these methods. The trait itself never
/// sorts anything: every method *requires* its receiver (and, for the
/// two-input methods, the argument) to be non-decreasing under the
/// comparator in use, and leaves the output unspecified otherwise.
pub trait SortedSequence: IntoIterator + Sized {
    /// Returns the sorted difference of two sorted sequences.
    ///
    /// An element of `self` is suppressed by at most one equal element of
    /// `other`, so duplicates subtract copy for copy: with `k1` copies on
    /// the left and `k2` on the right, `max(k1 - k2, 0)` copies survive.
    ///
    /// # Arguments
    ///
    /// * `other` - The sorted sequence whose elements are subtracted
    /// * `compare` - Three-way comparator both inputs are sorted under
    ///
    /// # Complexity
    ///
    /// O(n + m) comparisons over the whole output; O(1) per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::merge::SortedSequence;
    ///
    /// let remaining: Vec<i32> = [1, 2, 2, 5]
    ///     .difference_by([2, 3], i32::cmp)
    ///     .collect();
    /// assert_eq!(remaining, vec![1, 2, 5]);
    /// ```
    fn difference_by<J, F>(
        self,
        other: J,
        compare: F,
    ) -> Difference<Self::IntoIter, J::IntoIter, F>
    where
        J: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Difference::new(self.into_iter(), other.into_iter(), compare)
    }

    /// Returns the sorted difference of two sorted sequences under the
    /// natural order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::merge::SortedSequence;
    ///
    /// let remaining: Vec<i32> = [1, 3, 5].difference([3, 4]).collect();
    /// assert_eq!(remaining, vec![1, 5]);
    /// ```
    fn difference<J>(
        self,
        other: J,
    ) -> Difference<Self::IntoIter, J::IntoIter, NaturalOrder<Self::Item>>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        self.difference_by(other, Ord::cmp)
    }

    /// Returns the sorted intersection of two sorted sequences.
    ///
    /// Each matching pair consumes one element from either side, so with
    /// `k1` copies on the left and `k2` on the right the output carries
    /// `min(k1, k2)` copies. Emitted elements are taken from `self`.
    ///
    /// # Arguments
    ///
    /// * `other` - The sorted sequence to intersect with
    /// * `compare` - Three-way comparator both inputs are sorted under
    ///
    /// # Complexity
    ///
    /// O(n + m) comparisons over the whole output; O(1) per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::merge::SortedSequence;
    ///
    /// let shared: Vec<i32> = [1, 2, 2, 4]
    ///     .intersect_by([2, 2, 3, 4], i32::cmp)
    ///     .collect();
    /// assert_eq!(shared, vec![2, 2, 4]);
    /// ```
    fn intersect_by<J, F>(self, other: J, compare: F) -> Intersect<Self::IntoIter, J::IntoIter, F>
    where
        J: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Intersect::new(self.into_iter(), other.into_iter(), compare)
    }

    /// Returns the sorted intersection of two sorted sequences under the
    /// natural order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::merge::SortedSequence;
    ///
    /// let shared: Vec<i32> = [1, 3, 5].intersect([2, 3, 5]).collect();
    /// assert_eq!(shared, vec![3, 5]);
    /// ```
    fn intersect<J>(
        self,
        other: J,
    ) -> Intersect<Self::IntoIter, J::IntoIter, NaturalOrder<Self::Item>>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        self.intersect_by(other, Ord::cmp)
    }

    /// Returns the sorted union of two sorted sequences.
    ///
    /// When the current elements tie, the left element is emitted and both
    /// sides advance, so with `k1` copies on the left and `k2` on the right
    /// the output carries `max(k1, k2)` copies.
    ///
    /// # Arguments
    ///
    /// * `other` - The sorted sequence to merge with
    /// * `compare` - Three-way comparator both inputs are sorted under
    ///
    /// # Complexity
    ///
    /// O(n + m) comparisons over the whole output; O(1) per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::merge::SortedSequence;
    ///
    /// let merged: Vec<i32> = [1, 1, 3]
    ///     .union_by([1, 2], i32::cmp)
    ///     .collect();
    /// assert_eq!(merged, vec![1, 1, 2, 3]);
    /// ```
    fn union_by<J, F>(self, other: J, compare: F) -> Union<Self::IntoIter, J::IntoIter, F>
    where
        J: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Union::new(self.into_iter(), other.into_iter(), compare)
    }

    /// Returns the sorted union of two sorted sequences under the natural
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::merge::SortedSequence;
    ///
    /// let merged: Vec<i32> = [1, 4].union([2, 4, 6]).collect();
    /// assert_eq!(merged, vec![1, 2, 4, 6]);
    /// ```
    fn union<J>(self, other: J) -> Union<Self::IntoIter, J::IntoIter, NaturalOrder<Self::Item>>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        self.union_by(other, Ord::cmp)
    }

    /// Collapses each run of equal adjacent elements to its first member.
    ///
    /// On sorted input this yields exactly the distinct elements. The
    /// predicate must be an equivalence relation over the values that
    /// actually appear; on input whose equal values are not contiguous,
    /// only adjacent duplicates are removed.
    ///
    /// # Arguments
    ///
    /// * `equal` - Equality predicate identifying duplicates
    ///
    /// # Complexity
    ///
    /// O(n) predicate calls over the whole output; each input element is
    /// examined once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::merge::SortedSequence;
    ///
    /// let words = ["ape", "axe", "bat", "cow", "cat"];
    /// let one_per_letter: Vec<&str> = words
    ///     .distinct_by(|left, right| left.as_bytes()[0] == right.as_bytes()[0])
    ///     .collect();
    /// assert_eq!(one_per_letter, vec!["ape", "bat", "cow"]);
    /// ```
    fn distinct_by<F>(self, equal: F) -> Distinct<Self::IntoIter, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        Distinct::new(self.into_iter(), equal)
    }

    /// Collapses adjacent duplicates under `==`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::merge::SortedSequence;
    ///
    /// let unique: Vec<i32> = [1, 1, 2, 3, 3, 3].distinct().collect();
    /// assert_eq!(unique, vec![1, 2, 3]);
    /// ```
    fn distinct(self) -> Distinct<Self::IntoIter, NaturalEquality<Self::Item>>
    where
        Self::Item: PartialEq,
    {
        self.distinct_by(PartialEq::eq)
    }

    /// Runs a sort-merge group join against a sorted inner sequence,
    /// invoking `join_action` once per matching outer/inner pair.
    ///
    /// This is [`crate::join::group_join_by`] in method position; see that
    /// function for the full consumption contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::merge::SortedSequence;
    ///
    /// let parents = [(1, "a"), (2, "b")];
    /// let children = [(1, 10), (2, 20), (2, 21)];
    ///
    /// let mut pairs = Vec::new();
    /// parents.group_join_by(
    ///     children,
    ///     |parent| parent.0,
    ///     |child| child.0,
    ///     |parent, child| pairs.push((parent.1, child.1)),
    ///     i32::cmp,
    /// );
    /// assert_eq!(pairs, vec![("a", 10), ("b", 20), ("b", 21)]);
    /// ```
    #[cfg(feature = "join")]
    fn group_join_by<J, K, OuterKey, InnerKey, Action, C>(
        self,
        inner: J,
        outer_key: OuterKey,
        inner_key: InnerKey,
        join_action: Action,
        compare: C,
    ) where
        J: IntoIterator,
        OuterKey: FnMut(&Self::Item) -> K,
        InnerKey: FnMut(&J::Item) -> K,
        Action: FnMut(&Self::Item, &J::Item),
        C: FnMut(&K, &K) -> Ordering,
    {
        crate::join::group_join_by(self, inner, outer_key, inner_key, join_action, compare);
    }

    /// Runs a sort-merge group join using the natural order of the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::merge::SortedSequence;
    ///
    /// let parents = [1, 2, 3];
    /// let children = [(2, "x"), (3, "y")];
    ///
    /// let mut matched = Vec::new();
    /// parents.group_join(
    ///     children,
    ///     |parent| *parent,
    ///     |child| child.0,
    ///     |parent, child| matched.push((*parent, child.1)),
    /// );
    /// assert_eq!(matched, vec![(2, "x"), (3, "y")]);
    /// ```
    #[cfg(feature = "join")]
    fn group_join<J, K, OuterKey, InnerKey, Action>(
        self,
        inner: J,
        outer_key: OuterKey,
        inner_key: InnerKey,
        join_action: Action,
    ) where
        J: IntoIterator,
        K: Ord,
        OuterKey: FnMut(&Self::Item) -> K,
        InnerKey: FnMut(&J::Item) -> K,
        Action: FnMut(&Self::Item, &J::Item),
    {
        crate::join::group_join(self, inner, outer_key, inner_key, join_action);
    }
}

impl<I: IntoIterator> SortedSequence for I {}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    // =========================================================================
    // trait surface tests
    // =========================================================================

    #[rstest]
    fn methods_are_available_on_common_sequence_types() {
        let from_array: Vec<i32> = [1, 3].union([2]).collect();
        assert_eq!(from_array, vec![1, 2, 3]);

        let from_vec: Vec<i32> = vec![1, 3].intersect(vec![3, 5]).collect();
        assert_eq!(from_vec, vec![3]);

        let from_range: Vec<i32> = (1..4).difference(2..3).collect();
        assert_eq!(from_range, vec![1, 3]);
    }

    #[rstest]
    fn borrowed_input_yields_references() {
        let left = vec![1, 2, 4];
        let right = vec![2, 3];

        let shared: Vec<&i32> = left
            .iter()
            .intersect_by(right.iter(), |left, right| left.cmp(right))
            .collect();
        assert_eq!(shared, vec![&2]);

        // The owned vectors are still usable afterwards.
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 2);
    }

    #[rstest]
    fn adapters_compose_with_ordinary_iterator_combinators() {
        let summed: i32 = [1, 2, 3, 4].difference([2, 4]).map(|value| value * 10).sum();
        assert_eq!(summed, 40);
    }

    #[rstest]
    fn natural_order_variants_match_explicit_comparator_variants() {
        let left = [1, 2, 2, 7];
        let right = [2, 7, 9];

        let natural: Vec<i32> = left.union(right).collect();
        let explicit: Vec<i32> = left.union_by(right, i32::cmp).collect();
        assert_eq!(natural, explicit);
    }
}
