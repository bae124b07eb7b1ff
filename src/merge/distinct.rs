//! Adjacent-duplicate removal over a sorted sequence.

use std::iter::Peekable;

/// Lazy iterator collapsing each run of equal adjacent elements to its
/// first member.
///
/// On sorted input this yields exactly the distinct elements, without
/// requiring `Clone`: when a run's first member is emitted, the rest of the
/// run is consumed through the peek slot. On input whose equal values are
/// not contiguous, only adjacent duplicates are removed. Created by
/// [`SortedSequence::distinct`](crate::merge::SortedSequence::distinct) and
/// [`SortedSequence::distinct_by`](crate::merge::SortedSequence::distinct_by).
///
/// # Examples
///
/// ```rust
/// use ordseq::merge::SortedSequence;
///
/// let unique: Vec<i32> = [1, 1, 2, 3, 3, 3].distinct().collect();
/// assert_eq!(unique, vec![1, 2, 3]);
/// ```
#[must_use]
pub struct Distinct<I, F>
where
    I: Iterator,
{
    iter: Peekable<I>,
    equal: F,
}

impl<I, F> Distinct<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    /// Wraps a sorted iterator without consuming anything.
    pub(crate) fn new(iter: I, equal: F) -> Self {
        Self {
            iter: iter.peekable(),
            equal,
        }
    }
}

impl<I, F> Iterator for Distinct<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let current = self.iter.next()?;
        // Drain the rest of the run before handing out its first member.
        while let Some(candidate) = self.iter.peek() {
            if (self.equal)(&current, candidate) {
                self.iter.next();
            } else {
                break;
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        // A non-empty input collapses to at least one element.
        (lower.min(1), upper)
    }
}

impl<I, F> std::fmt::Debug for Distinct<I, F>
where
    I: Iterator + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Distinct")
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}
