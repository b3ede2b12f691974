//! Max-heap direction and constructors

use std::cmp::Ordering;

use super::{BinaryHeap, Direction};
use crate::compare::{FnComparator, Natural, Partial};

/// Keeps the largest element at the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

impl Direction for Max {
    const NAME: &'static str = "max";

    #[inline]
    fn favors(ord: Ordering) -> bool {
        ord == Ordering::Greater
    }
}

/// A binary max-heap: `pop` returns the largest element first
///
/// # Example
///
/// ```rust
/// use collections_ext::Heap;
/// use collections_ext::heap::MaxHeap;
///
/// let mut heap = MaxHeap::new();
/// heap.push(3).unwrap();
/// heap.push(9).unwrap();
/// heap.push(4).unwrap();
///
/// assert_eq!(heap.peek(), Some(&9));
/// assert_eq!(heap.pop(), Ok(9));
/// assert_eq!(heap.pop(), Ok(4));
/// ```
pub type MaxHeap<T, C = Natural> = BinaryHeap<T, Max, C>;

impl<T: Ord> BinaryHeap<T, Max, Natural> {
    /// Creates an empty max-heap over the natural order of `T`
    pub fn new() -> Self {
        Self::from_comparator(Natural)
    }
}

impl<T: PartialOrd> BinaryHeap<T, Max, Partial> {
    /// Creates an empty max-heap over the partial order of `T`
    pub fn partial() -> Self {
        Self::from_comparator(Partial)
    }
}

impl<T, F> BinaryHeap<T, Max, FnComparator<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty max-heap ordered by `compare`
    pub fn with_comparator(compare: F) -> Self {
        Self::from_comparator(FnComparator::new(compare))
    }
}
