//! # ordseq
//!
//! Merge-based algorithms over already-sorted sequences.
//!
//! ## Overview
//!
//! Every algorithm in this crate exploits a single precondition, that its
//! input sequences are non-decreasing under a caller-supplied comparator, to
//! do its work in one forward pass:
//!
//! - **Lazy set algebra**: [`difference`](merge::SortedSequence::difference),
//!   [`intersect`](merge::SortedSequence::intersect),
//!   [`union`](merge::SortedSequence::union) and
//!   [`distinct`](merge::SortedSequence::distinct) iterator adapters that
//!   advance two cursors by a three-way comparison in O(n + m)
//! - **Group join**: [`group_join`](join::group_join), an eager sort-merge
//!   parent/child join that drives a callback once per matching pair
//! - **Binary search**: [`binary_search_first`](search::binary_search_first)
//!   and [`binary_search_last`](search::binary_search_last), reporting either
//!   a found index or an insertion point through one signed result
//! - **Ordered maintenance**: [`insert_ordered`](search::insert_ordered) and
//!   [`remove_ordered`](search::remove_ordered), which keep a random-access
//!   container sorted through point mutations
//!
//! Sortedness is trusted, never verified: handing any algorithm an unsorted
//! sequence (or two sequences sorted under different comparators) silently
//! produces unspecified output. That trade is what keeps the set operations
//! linear and the searches logarithmic. [`compare::is_sorted_by`] exists for
//! callers who want to validate their own inputs first.
//!
//! There is no runtime failure mode: sequences, comparators, and callbacks
//! are ordinary non-nullable values, so the absent-argument errors a looser
//! language would raise at runtime are rejected here at compile time.
//!
//! ## Feature Flags
//!
//! - `merge`: lazy set-algebra adapters (difference, intersect, union,
//!   distinct)
//! - `join`: sort-merge group join
//! - `search`: binary search and ordered insert/remove
//! - `smallvec`: [`search::OrderedContainer`] support for
//!   `smallvec::SmallVec`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordseq::prelude::*;
//!
//! let merged: Vec<i32> = [1, 3, 5].union([2, 3, 4]).collect();
//! assert_eq!(merged, vec![1, 2, 3, 4, 5]);
//!
//! let overlap: Vec<i32> = [1, 3, 5].intersect([2, 3, 4]).collect();
//! assert_eq!(overlap, vec![3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ordseq::prelude::*;
/// ```
pub mod prelude {

    pub use crate::compare::*;

    #[cfg(feature = "merge")]
    pub use crate::merge::*;

    #[cfg(feature = "join")]
    pub use crate::join::*;

    #[cfg(feature = "search")]
    pub use crate::search::*;
}

pub mod compare;

#[cfg(feature = "merge")]
pub mod merge;

#[cfg(feature = "join")]
pub mod join;

#[cfg(feature = "search")]
pub mod search;
