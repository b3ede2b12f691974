//! Common trait for heap data structures
//!
//! [`Heap`] is the abstraction both heap directions implement. It mirrors
//! the shape of `std::collections::BinaryHeap` (`push`, `pop`, `peek`), but
//! the fallible operations report failure through [`CollectionError`]
//! instead of `Option`, so an empty pop and an unorderable comparison are
//! distinguishable.

use crate::error::CollectionError;

/// Base trait for heap/priority queue data structures
///
/// The element returned by `pop`/`peek` is the most extreme one: the
/// smallest for a min-heap, the largest for a max-heap.
///
/// # Example
///
/// ```rust
/// use collections_ext::Heap;
/// use collections_ext::heap::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.push(3).unwrap();
/// heap.push(1).unwrap();
/// heap.push(2).unwrap();
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Errors
    /// Returns `CollectionError::InvalidArgument` if the comparator cannot
    /// order the new element against one already stored. The heap is left
    /// unchanged in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T) -> Result<(), CollectionError>;

    /// Returns the most extreme element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the most extreme element
    ///
    /// # Errors
    /// Returns `CollectionError::EmptyCollection` if the heap is empty, or
    /// `CollectionError::InvalidArgument` if the comparator fails while
    /// restoring the heap property. The heap is left unchanged either way.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, CollectionError>;
}
