//! Sorted union of two sorted sequences.

use std::cmp::Ordering;
use std::iter::Peekable;

/// Lazy iterator merging two sorted sequences, emitting tied elements once.
///
/// At each step the smaller current element is emitted; on a tie the left
/// element is emitted and both sides advance. A value occurring `k1` times
/// on the left and `k2` times on the right therefore appears `max(k1, k2)`
/// times in the output. Created by
/// [`SortedSequence::union`](crate::merge::SortedSequence::union) and
/// [`SortedSequence::union_by`](crate::merge::SortedSequence::union_by).
///
/// # Examples
///
/// ```rust
/// use ordseq::merge::SortedSequence;
///
/// let merged: Vec<i32> = [1, 2, 4, 6].union([2, 3, 6]).collect();
/// assert_eq!(merged, vec![1, 2, 3, 4, 6]);
/// ```
#[must_use]
pub struct Union<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    left: Peekable<I>,
    right: Peekable<J>,
    compare: F,
}

impl<I, J, F> Union<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    /// Wraps two sorted iterators without consuming either.
    pub(crate) fn new(left: I, right: J, compare: F) -> Self {
        Self {
            left: left.peekable(),
            right: right.peekable(),
            compare,
        }
    }
}

impl<I, J, F> Iterator for Union<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match (self.left.peek(), self.right.peek()) {
            (Some(left), Some(right)) => match (self.compare)(left, right) {
                Ordering::Less => self.left.next(),
                Ordering::Greater => self.right.next(),
                Ordering::Equal => {
                    // A tie is emitted once, taken from the left.
                    self.right.next();
                    self.left.next()
                }
            },
            (Some(_), None) => self.left.next(),
            (None, _) => self.right.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lower, left_upper) = self.left.size_hint();
        let (right_lower, right_upper) = self.right.size_hint();
        // Every step advances at least one side, and ties advance both.
        let upper = match (left_upper, right_upper) {
            (Some(left), Some(right)) => left.checked_add(right),
            _ => None,
        };
        (left_lower.max(right_lower), upper)
    }
}

impl<I, J, F> std::fmt::Debug for Union<I, J, F>
where
    I: Iterator + std::fmt::Debug,
    J: Iterator<Item = I::Item> + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Union")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}
