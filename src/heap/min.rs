//! Min-heap direction and constructors
//!
//! # Example
//!
//! ```rust
//! use collections_ext::Heap;
//! use collections_ext::heap::MinHeap;
//!
//! // Order strings by length instead of alphabetically
//! let mut heap = MinHeap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! heap.push("three").unwrap();
//! heap.push("one").unwrap();
//! heap.push("sixteen").unwrap();
//!
//! assert_eq!(heap.pop(), Ok("one"));
//! assert_eq!(heap.pop(), Ok("three"));
//! ```

use std::cmp::Ordering;

use super::{BinaryHeap, Direction};
use crate::compare::{FnComparator, Natural, Partial};

/// Keeps the smallest element at the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

impl Direction for Min {
    const NAME: &'static str = "min";

    #[inline]
    fn favors(ord: Ordering) -> bool {
        ord == Ordering::Less
    }
}

/// A binary min-heap: `pop` returns the smallest element first
pub type MinHeap<T, C = Natural> = BinaryHeap<T, Min, C>;

impl<T: Ord> BinaryHeap<T, Min, Natural> {
    /// Creates an empty min-heap over the natural order of `T`
    pub fn new() -> Self {
        Self::from_comparator(Natural)
    }
}

impl<T: PartialOrd> BinaryHeap<T, Min, Partial> {
    /// Creates an empty min-heap over the partial order of `T`
    ///
    /// Pushing or popping fails with
    /// [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
    /// when two elements turn out to be incomparable.
    pub fn partial() -> Self {
        Self::from_comparator(Partial)
    }
}

impl<T, F> BinaryHeap<T, Min, FnComparator<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty min-heap ordered by `compare`
    pub fn with_comparator(compare: F) -> Self {
        Self::from_comparator(FnComparator::new(compare))
    }
}
