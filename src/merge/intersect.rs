//! Sorted intersection of two sorted sequences.

use std::cmp::Ordering;
use std::iter::Peekable;

/// Lazy iterator over the elements present in both of two sorted sequences.
///
/// Each matching pair consumes one element from either side, so the output
/// carries `min(k1, k2)` copies of a value occurring `k1` times on the left
/// and `k2` times on the right. The emitted elements are the left ones.
/// Created by
/// [`SortedSequence::intersect`](crate::merge::SortedSequence::intersect)
/// and
/// [`SortedSequence::intersect_by`](crate::merge::SortedSequence::intersect_by).
///
/// # Examples
///
/// ```rust
/// use ordseq::merge::SortedSequence;
///
/// let shared: Vec<i32> = [1, 2, 4, 6].intersect([2, 3, 6]).collect();
/// assert_eq!(shared, vec![2, 6]);
/// ```
#[must_use]
pub struct Intersect<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    left: Peekable<I>,
    right: Peekable<J>,
    compare: F,
}

impl<I, J, F> Intersect<I, J, F>
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

impl<I, J, F> Iterator for Intersect<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let left = self.left.peek()?;
            let right = self.right.peek()?;

            match (self.compare)(left, right) {
                Ordering::Less => {
                    self.left.next();
                }
                Ordering::Greater => {
                    self.right.next();
                }
                Ordering::Equal => {
                    self.right.next();
                    return self.left.next();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, left_upper) = self.left.size_hint();
        let (_, right_upper) = self.right.size_hint();
        // The output cannot be longer than the shorter known side.
        let upper = match (left_upper, right_upper) {
            (Some(left), Some(right)) => Some(left.min(right)),
            (Some(left), None) => Some(left),
            (None, right) => right,
        };
        (0, upper)
    }
}

impl<I, J, F> std::fmt::Debug for Intersect<I, J, F>
where
    I: Iterator + std::fmt::Debug,
    J: Iterator<Item = I::Item> + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Intersect")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::by_key;
    use crate::merge::SortedSequence;
    use rstest::rstest;
    use std::cell::Cell;

    // =========================================================================
    // output tests
    // =========================================================================

    #[rstest]
    #[case::both_empty(vec![], vec![], vec![])]
    #[case::left_empty(vec![], vec![1, 2], vec![])]
    #[case::right_empty(vec![1, 2], vec![], vec![])]
    #[case::disjoint(vec![1, 3], vec![2, 4], vec![])]
    #[case::identical(vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3])]
    #[case::interleaved(vec![1, 2, 4, 6], vec![2, 3, 6], vec![2, 6])]
    #[case::duplicates_keep_the_smaller_count(vec![1, 1, 2], vec![1, 2, 2], vec![1, 2])]
    #[case::double_match(vec![4, 4], vec![4, 4, 4], vec![4, 4])]
    #[case::single_overlap_at_the_end(vec![1, 9], vec![5, 9], vec![9])]
    fn intersect_cases(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let shared: Vec<i32> = left.intersect(right).collect();
        assert_eq!(shared, expected);
    }

    #[rstest]
    fn emitted_elements_come_from_the_left_sequence() {
        let left = [(1, "left"), (2, "left")];
        let right = [(2, "right"), (3, "right")];

        let shared: Vec<(i32, &str)> = left
            .intersect_by(right, by_key(|pair: &(i32, &str)| pair.0))
            .collect();
        assert_eq!(shared, vec![(2, "left")]);
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

        let intersection = left.intersect_by([2], i32::cmp);
        assert_eq!(pulled.get(), 0);
        drop(intersection);
    }

    #[rstest]
    fn stops_pulling_once_either_side_is_exhausted() {
        let right_pulls = Cell::new(0_usize);

        let shared: Vec<i32> = [5]
            .into_iter()
            .intersect_by(
                (1..1000).inspect(|_| right_pulls.set(right_pulls.get() + 1)),
                i32::cmp,
            )
            .collect();

        assert_eq!(shared, vec![5]);
        // Everything after the match on 5 is only touched far enough to
        // notice the left side ran dry.
        assert!(right_pulls.get() <= 6);
    }

    // =========================================================================
    // iterator contract tests
    // =========================================================================

    #[rstest]
    fn size_hint_upper_bound_is_the_shorter_side() {
        let intersection = [1, 2, 3, 4].intersect([2, 3]);
        assert_eq!(intersection.size_hint(), (0, Some(2)));
    }

    #[rstest]
    fn keeps_returning_none_after_exhaustion() {
        let mut intersection = [1].into_iter().intersect_by([1], i32::cmp);
        assert_eq!(intersection.next(), Some(1));
        assert_eq!(intersection.next(), None);
        assert_eq!(intersection.next(), None);
    }
}
