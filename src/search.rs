//! Binary search and ordered-container maintenance.
//!
//! The searches in this module locate a value in a sorted slice and report
//! their outcome through a single signed result:
//!
//! - **Found**: the index of the matching element, as a non-negative value.
//!   [`binary_search_first`] points at the first of several equal elements,
//!   [`binary_search_last`] at the last.
//! - **Absent**: the bitwise complement of the insertion point, always
//!   negative. `!result as usize` recovers the index at which the value
//!   could be inserted without disturbing the order; it may equal `len`.
//!
//! One comparison against zero therefore distinguishes the two payloads,
//! and the insertion point comes for free when a probe misses.
//!
//! Building on the searches, [`insert_ordered`] and [`remove_ordered`]
//! maintain any random-access container implementing [`OrderedContainer`]
//! (notably `Vec`, and `SmallVec` behind the `smallvec` feature), keeping
//! it sorted through point insertions and removals.
//!
//! As everywhere in this crate, the slice is trusted to be sorted under the
//! comparator in use; the result is unspecified otherwise.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::search::{binary_search_first, insert_ordered};
//!
//! let mut scores = vec![320, 410, 550];
//!
//! assert_eq!(binary_search_first(&scores, &410), 1);
//!
//! let missing = binary_search_first(&scores, &500);
//! assert!(missing < 0);
//! assert_eq!(!missing as usize, 2);
//!
//! insert_ordered(&mut scores, 500);
//! assert_eq!(scores, vec![320, 410, 500, 550]);
//! ```

use std::cmp::Ordering;

// A slice never holds more than `isize::MAX` elements, so widening an index
// or an insertion point into the signed channel cannot wrap.
#[allow(clippy::cast_possible_wrap)]
const fn encode_index(index: usize) -> isize {
    index as isize
}

#[allow(clippy::cast_sign_loss)]
const fn decode_index(raw: isize) -> usize {
    if raw >= 0 { raw as usize } else { !raw as usize }
}

// =============================================================================
// Binary Search
// =============================================================================

/// Locates the first occurrence of `target` in a slice sorted under
/// `compare`.
///
/// Returns the index of the leftmost element comparing equal to `target`,
/// or the bitwise complement of the insertion point (a negative value) when
/// no element matches. See the [module documentation](crate::search) for
/// the result encoding.
///
/// # Arguments
///
/// * `slice` - The sorted slice to probe
/// * `target` - The value to locate
/// * `compare` - Three-way comparator the slice is sorted under
///
/// # Complexity
///
/// O(log n) comparisons.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::binary_search_first_by;
///
/// let values = [1, 3, 3, 5];
/// assert_eq!(binary_search_first_by(&values, &3, i32::cmp), 1);
/// assert_eq!(binary_search_first_by(&values, &4, i32::cmp), !3);
/// ```
#[must_use]
pub fn binary_search_first_by<T, F>(slice: &[T], target: &T, mut compare: F) -> isize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut low = 0;
    let mut high = slice.len();

    // Invariant: elements before `low` compare less than `target`, elements
    // at `high` and beyond compare greater or equal; both bounds stay
    // within [0, len].
    while low < high {
        let middle = low + (high - low) / 2;
        if compare(&slice[middle], target) == Ordering::Less {
            low = middle + 1;
        } else {
            high = middle;
        }
    }

    if low < slice.len() && compare(&slice[low], target) == Ordering::Equal {
        encode_index(low)
    } else {
        !encode_index(low)
    }
}

/// Locates the first occurrence of `target` under the natural order.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::binary_search_first;
///
/// assert_eq!(binary_search_first(&[10, 20, 20, 30], &20), 1);
/// assert_eq!(binary_search_first(&[10, 20, 20, 30], &5), !0);
/// ```
#[must_use]
pub fn binary_search_first<T: Ord>(slice: &[T], target: &T) -> isize {
    binary_search_first_by(slice, target, T::cmp)
}

/// Locates the last occurrence of `target` in a slice sorted under
/// `compare`.
///
/// Returns the index of the rightmost element comparing equal to `target`,
/// or the bitwise complement of the insertion point (a negative value) when
/// no element matches. For an absent value the insertion point is the same
/// one [`binary_search_first_by`] reports.
///
/// # Arguments
///
/// * `slice` - The sorted slice to probe
/// * `target` - The value to locate
/// * `compare` - Three-way comparator the slice is sorted under
///
/// # Complexity
///
/// O(log n) comparisons.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::binary_search_last_by;
///
/// let values = [1, 3, 3, 5];
/// assert_eq!(binary_search_last_by(&values, &3, i32::cmp), 2);
/// assert_eq!(binary_search_last_by(&values, &4, i32::cmp), !3);
/// ```
#[must_use]
pub fn binary_search_last_by<T, F>(slice: &[T], target: &T, mut compare: F) -> isize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut low = 0;
    let mut high = slice.len();

    // Invariant: elements before `low` compare less or equal to `target`,
    // elements at `high` and beyond compare greater; both bounds stay
    // within [0, len].
    while low < high {
        let middle = low + (high - low) / 2;
        if compare(&slice[middle], target) == Ordering::Greater {
            high = middle;
        } else {
            low = middle + 1;
        }
    }

    // `low` is now one past the last element not greater than `target`.
    if low > 0 && compare(&slice[low - 1], target) == Ordering::Equal {
        encode_index(low - 1)
    } else {
        !encode_index(low)
    }
}

/// Locates the last occurrence of `target` under the natural order.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::binary_search_last;
///
/// assert_eq!(binary_search_last(&[10, 20, 20, 30], &20), 2);
/// assert_eq!(binary_search_last(&[10, 20, 20, 30], &35), !4);
/// ```
#[must_use]
pub fn binary_search_last<T: Ord>(slice: &[T], target: &T) -> isize {
    binary_search_last_by(slice, target, T::cmp)
}

// =============================================================================
// Ordered Containers
// =============================================================================

/// A random-access container that [`insert_ordered`] and [`remove_ordered`]
/// can maintain in sorted order.
///
/// Implementations expose their elements as a slice for searching and
/// support point insertion and removal at an index. The trait itself knows
/// nothing about ordering; the maintenance functions supply it.
pub trait OrderedContainer<T> {
    /// Returns the stored elements in index order.
    fn as_slice(&self) -> &[T];

    /// Inserts `value` at `index`, shifting later elements one place right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    fn insert_at(&mut self, index: usize, value: T);

    /// Removes and returns the element at `index`, shifting later elements
    /// one place left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn remove_at(&mut self, index: usize) -> T;

    /// Returns the number of stored elements.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` when the container holds no elements.
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> OrderedContainer<T> for Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }

    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }

    fn remove_at(&mut self, index: usize) -> T {
        self.remove(index)
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> OrderedContainer<A::Item> for smallvec::SmallVec<A> {
    fn as_slice(&self) -> &[A::Item] {
        self
    }

    fn insert_at(&mut self, index: usize, value: A::Item) {
        self.insert(index, value);
    }

    fn remove_at(&mut self, index: usize) -> A::Item {
        self.remove(index)
    }
}

// =============================================================================
// Ordered Maintenance
// =============================================================================

/// Inserts `value` into a container sorted under `compare`, keeping it
/// sorted.
///
/// The value lands at the first-occurrence insertion point, so it ends up
/// *before* any elements already comparing equal to it.
///
/// # Complexity
///
/// O(log n) comparisons plus the container's cost of shifting elements,
/// O(n) in the worst case.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::insert_ordered_by;
///
/// let mut values = vec![10, 30];
/// insert_ordered_by(&mut values, 20, i32::cmp);
/// insert_ordered_by(&mut values, 5, i32::cmp);
/// assert_eq!(values, vec![5, 10, 20, 30]);
/// ```
pub fn insert_ordered_by<T, C, F>(container: &mut C, value: T, compare: F)
where
    C: OrderedContainer<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let raw = binary_search_first_by(container.as_slice(), &value, compare);
    container.insert_at(decode_index(raw), value);
}

/// Inserts `value` into a container sorted under the natural order.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::insert_ordered;
///
/// let mut values = vec![1, 3];
/// insert_ordered(&mut values, 2);
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn insert_ordered<T, C>(container: &mut C, value: T)
where
    T: Ord,
    C: OrderedContainer<T>,
{
    insert_ordered_by(container, value, T::cmp);
}

/// Removes the first element comparing equal to `target` from a container
/// sorted under `compare`.
///
/// Returns the removed element, or `None` (leaving the container untouched)
/// when nothing matches.
///
/// # Complexity
///
/// O(log n) comparisons plus the container's cost of shifting elements,
/// O(n) in the worst case.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::remove_ordered_by;
///
/// let mut values = vec![10, 20, 30];
/// assert_eq!(remove_ordered_by(&mut values, &20, i32::cmp), Some(20));
/// assert_eq!(remove_ordered_by(&mut values, &20, i32::cmp), None);
/// assert_eq!(values, vec![10, 30]);
/// ```
pub fn remove_ordered_by<T, C, F>(container: &mut C, target: &T, compare: F) -> Option<T>
where
    C: OrderedContainer<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let raw = binary_search_first_by(container.as_slice(), target, compare);
    if raw < 0 {
        return None;
    }
    Some(container.remove_at(decode_index(raw)))
}

/// Removes the first element equal to `target` under the natural order.
///
/// # Examples
///
/// ```rust
/// use ordseq::search::remove_ordered;
///
/// let mut values = vec![1, 2, 3];
/// assert_eq!(remove_ordered(&mut values, &2), Some(2));
/// assert_eq!(values, vec![1, 3]);
/// ```
pub fn remove_ordered<T, C>(container: &mut C, target: &T) -> Option<T>
where
    T: Ord,
    C: OrderedContainer<T>,
{
    remove_ordered_by(container, target, T::cmp)
}
