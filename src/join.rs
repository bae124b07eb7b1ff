//! Sort-merge group join over sorted sequences.
//!
//! [`group_join_by`] walks an outer (parent) and an inner (child) sequence,
//! both sorted by join key, and invokes a callback once per matching pair.
//! Unlike the adapters in [`crate::merge`], the join is eager: it runs to
//! completion in a single call and produces no intermediate collection,
//! which is what makes it suitable for very large inputs.
//!
//! # Consumption Contract
//!
//! Both cursors move strictly forward; the inner cursor is never rewound.
//! A run of equal-keyed inner elements is therefore consumed by the first
//! outer element that matches it, and later outer elements with the same
//! key find the run already consumed and match nothing. Callers whose outer
//! sequence can repeat keys should collapse it first (for example with
//! [`distinct_by`](crate::merge::SortedSequence::distinct_by)) or group the
//! inner side themselves.
//!
//! The join returns as soon as either side runs out: childless parents past
//! the end of the inner sequence and orphan children past the end of the
//! outer sequence are skipped without their keys ever being compared.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::join::group_join;
//!
//! let parents = [(1, "alice"), (2, "bob")];
//! let children = [(1, "a1"), (1, "a2"), (3, "orphan")];
//!
//! let mut families = Vec::new();
//! group_join(
//!     parents,
//!     children,
//!     |parent| parent.0,
//!     |child| child.0,
//!     |parent, child| families.push((parent.1, child.1)),
//! );
//! assert_eq!(families, vec![("alice", "a1"), ("alice", "a2")]);
//! ```

use std::cmp::Ordering;

/// Joins two key-sorted sequences, invoking `join_action` once per matching
/// outer/inner pair.
///
/// Keys are projected on demand with `outer_key` and `inner_key` and
/// compared with `compare`; both sequences must be non-decreasing by key
/// under that comparator. At each step the join compares the current pair
/// of keys: a smaller outer key advances the outer cursor, a smaller inner
/// key advances the inner cursor, and a tie fires the callback and then
/// advances the inner cursor only, so that the current outer element
/// collects its entire group of children.
///
/// See the [module documentation](crate::join) for the forward-only
/// consumption contract this implies for duplicate outer keys.
///
/// # Arguments
///
/// * `outer` - The parent side, sorted by `outer_key`
/// * `inner` - The child side, sorted by `inner_key`
/// * `outer_key` - Key projection for outer elements
/// * `inner_key` - Key projection for inner elements
/// * `join_action` - Callback receiving each matching pair
/// * `compare` - Three-way comparator both key sequences are sorted under
///
/// # Complexity
///
/// O(n + m) comparisons and O(1) auxiliary space; every element is visited
/// at most once.
///
/// # Examples
///
/// ```rust
/// use ordseq::compare::reverse;
/// use ordseq::join::group_join_by;
///
/// // Both sides sorted by key, descending.
/// let bids = [(9, "bid-a"), (7, "bid-b")];
/// let asks = [(9, "ask-a"), (8, "ask-b"), (7, "ask-c")];
///
/// let mut crossed = Vec::new();
/// group_join_by(
///     bids,
///     asks,
///     |bid| bid.0,
///     |ask| ask.0,
///     |bid, ask| crossed.push((bid.1, ask.1)),
///     reverse(i32::cmp),
/// );
/// assert_eq!(crossed, vec![("bid-a", "ask-a"), ("bid-b", "ask-c")]);
/// ```
pub fn group_join_by<Outer, Inner, K, OuterKey, InnerKey, Action, C>(
    outer: Outer,
    inner: Inner,
    mut outer_key: OuterKey,
    mut inner_key: InnerKey,
    mut join_action: Action,
    mut compare: C,
) where
    Outer: IntoIterator,
    Inner: IntoIterator,
    OuterKey: FnMut(&Outer::Item) -> K,
    InnerKey: FnMut(&Inner::Item) -> K,
    Action: FnMut(&Outer::Item, &Inner::Item),
    C: FnMut(&K, &K) -> Ordering,
{
    let mut outer = outer.into_iter();
    let mut inner = inner.into_iter();

    let first_outer = outer.next();
    let first_inner = inner.next();
    let (Some(mut outer_current), Some(mut inner_current)) = (first_outer, first_inner) else {
        return;
    };

    loop {
        match compare(&outer_key(&outer_current), &inner_key(&inner_current)) {
            Ordering::Less => match outer.next() {
                Some(next_outer) => outer_current = next_outer,
                None => return,
            },
            Ordering::Greater => match inner.next() {
                Some(next_inner) => inner_current = next_inner,
                None => return,
            },
            Ordering::Equal => {
                join_action(&outer_current, &inner_current);
                match inner.next() {
                    Some(next_inner) => inner_current = next_inner,
                    None => return,
                }
            }
        }
    }
}

/// Joins two key-sorted sequences using the natural order of the key.
///
/// Equivalent to [`group_join_by`] with [`Ord::cmp`] as the comparator.
///
/// # Examples
///
/// ```rust
/// use ordseq::join::group_join;
///
/// let parents = [1, 2, 4];
/// let children = [(2, 'x'), (4, 'y'), (4, 'z')];
///
/// let mut matched = Vec::new();
/// group_join(
///     parents,
///     children,
///     |parent| *parent,
///     |child| child.0,
///     |parent, child| matched.push((*parent, child.1)),
/// );
/// assert_eq!(matched, vec![(2, 'x'), (4, 'y'), (4, 'z')]);
/// ```
pub fn group_join<Outer, Inner, K, OuterKey, InnerKey, Action>(
    outer: Outer,
    inner: Inner,
    outer_key: OuterKey,
    inner_key: InnerKey,
    join_action: Action,
) where
    Outer: IntoIterator,
    Inner: IntoIterator,
    K: Ord,
    OuterKey: FnMut(&Outer::Item) -> K,
    InnerKey: FnMut(&Inner::Item) -> K,
    Action: FnMut(&Outer::Item, &Inner::Item),
{
    group_join_by(outer, inner, outer_key, inner_key, join_action, Ord::cmp);
}
