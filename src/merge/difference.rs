//! Sorted difference of two sorted sequences.

use std::cmp::Ordering;
use std::iter::Peekable;

/// Lazy iterator over the elements of one sorted sequence that have no
/// counterpart in another.
///
/// Duplicates cancel copy for copy: each element of the right sequence
/// suppresses at most one equal element of the left sequence. Created by
/// [`SortedSequence::difference`](crate::merge::SortedSequence::difference)
/// and
/// [`SortedSequence::difference_by`](crate::merge::SortedSequence::difference_by).
///
/// # Examples
///
/// ```rust
/// use ordseq::merge::SortedSequence;
///
/// let survivors: Vec<i32> = [1, 2, 4, 6].difference([2, 3, 6]).collect();
/// assert_eq!(survivors, vec![1, 4]);
/// ```
#[must_use]
pub struct Difference<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    left: Peekable<I>,
    right: Peekable<J>,
    compare: F,
}

impl<I, J, F> Difference<I, J, F>
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

impl<I, J, F> Iterator for Difference<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let left = self.left.peek()?;
            let Some(right) = self.right.peek() else {
                // Right side exhausted: the rest of the left side survives.
                return self.left.next();
            };

            match (self.compare)(left, right) {
                Ordering::Less => return self.left.next(),
                Ordering::Greater => {
                    self.right.next();
                }
                Ordering::Equal => {
                    self.left.next();
                    self.right.next();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lower, left_upper) = self.left.size_hint();
        let (_, right_upper) = self.right.size_hint();
        // Each right element suppresses at most one left element.
        let lower = right_upper.map_or(0, |bound| left_lower.saturating_sub(bound));
        (lower, left_upper)
    }
}

impl<I, J, F> std::fmt::Debug for Difference<I, J, F>
where
    I: Iterator + std::fmt::Debug,
    J: Iterator<Item = I::Item> + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Difference")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::reverse;
    use crate::merge::SortedSequence;
    use rstest::rstest;
    use std::cell::Cell;

    // =========================================================================
    // output tests
    // =========================================================================

    #[rstest]
    #[case::both_empty(vec![], vec![], vec![])]
    #[case::left_empty(vec![], vec![1, 2], vec![])]
    #[case::right_empty(vec![1, 2], vec![], vec![1, 2])]
    #[case::disjoint(vec![1, 3], vec![2, 4], vec![1, 3])]
    #[case::identical(vec![1, 2, 3], vec![1, 2, 3], vec![])]
    #[case::interleaved(vec![1, 2, 4, 6], vec![2, 3, 6], vec![1, 4])]
    #[case::duplicates_cancel_one_for_one(vec![1, 1, 2], vec![1], vec![1, 2])]
    #[case::excess_right_duplicates_ignored(vec![1, 1], vec![1, 1, 1], vec![])]
    #[case::right_smaller_than_all(vec![5, 6, 7], vec![1, 2], vec![5, 6, 7])]
    fn difference_cases(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let survivors: Vec<i32> = left.difference(right).collect();
        assert_eq!(survivors, expected);
    }

    #[rstest]
    fn descending_input_works_with_a_reversed_comparator() {
        let survivors: Vec<i32> = [9, 6, 2]
            .difference_by([6, 1], reverse(i32::cmp))
            .collect();
        assert_eq!(survivors, vec![9, 2]);
    }

    // =========================================================================
    // laziness tests
    // =========================================================================

    #[rstest]
    fn construction_consumes_no_input() {
        let pulled = Cell::new(0_usize);
        let left = [1, 2, 3]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1));

        let difference = left.difference_by([2], i32::cmp);
        assert_eq!(pulled.get(), 0);
        drop(difference);
    }

    #[rstest]
    fn each_input_element_is_pulled_exactly_once() {
        let left_pulls = Cell::new(0_usize);
        let right_pulls = Cell::new(0_usize);

        let survivors: Vec<i32> = [1, 2, 4, 6]
            .into_iter()
            .inspect(|_| left_pulls.set(left_pulls.get() + 1))
            .difference_by(
                [2, 3, 6]
                    .into_iter()
                    .inspect(|_| right_pulls.set(right_pulls.get() + 1)),
                i32::cmp,
            )
            .collect();

        assert_eq!(survivors, vec![1, 4]);
        assert_eq!(left_pulls.get(), 4);
        assert_eq!(right_pulls.get(), 3);
    }

    // =========================================================================
    // iterator contract tests
    // =========================================================================

    #[rstest]
    fn size_hint_brackets_the_true_length() {
        let difference = [1, 2, 3, 4].difference([2, 9]);
        assert_eq!(difference.size_hint(), (2, Some(4)));
    }

    #[rstest]
    fn size_hint_without_a_right_bound_falls_back_to_zero() {
        let difference = [1, 2, 3]
            .into_iter()
            .difference_by(std::iter::repeat(9), i32::cmp);
        assert_eq!(difference.size_hint(), (0, Some(3)));
    }

    #[rstest]
    fn keeps_returning_none_after_exhaustion() {
        let mut difference = [1].into_iter().difference_by([1], i32::cmp);
        assert_eq!(difference.next(), None);
        assert_eq!(difference.next(), None);
    }
}
