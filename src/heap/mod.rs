//! Array-backed binary heap
//!
//! A single [`BinaryHeap`] serves as both min-heap and max-heap. The
//! direction is a zero-sized type parameter ([`Min`] or [`Max`]) and the
//! ordering function is an injected [`Comparator`], so neither choice costs
//! a runtime branch or a virtual call.
//!
//! The tree is embedded in a `Vec` in level order:
//!
//! ```text
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//! ```
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `len`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use collections_ext::Heap;
//! use collections_ext::heap::{MaxHeap, MinHeap};
//!
//! let mut min = MinHeap::new();
//! let mut max = MaxHeap::new();
//! for value in [5, 1, 4, 2, 3] {
//!     min.push(value).unwrap();
//!     max.push(value).unwrap();
//! }
//!
//! assert_eq!(min.pop(), Ok(1));
//! assert_eq!(max.pop(), Ok(5));
//! ```

mod max;
mod min;

pub use max::{Max, MaxHeap};
pub use min::{Min, MinHeap};

use std::cmp::Ordering;
use std::fmt::Display;
use std::marker::PhantomData;

use smallvec::SmallVec;
use tracing::debug;

use crate::compare::{Comparator, FnComparator, Natural};
use crate::error::CollectionError;
use crate::snapshot::{HeapEntry, HeapSnapshot};
use crate::traits::Heap;

/// Which end of the order a heap keeps at its root
pub trait Direction {
    /// Name used in log events
    const NAME: &'static str;

    /// Returns true if an element that compares as `ord` against another
    /// element belongs strictly above it
    fn favors(ord: Ordering) -> bool;
}

mod private {
    pub trait Sealed {}

    impl Sealed for crate::compare::Natural {}

    impl<F> Sealed for crate::compare::FnComparator<F> {}
}

/// Comparators whose `compare` never returns an error
///
/// Bulk insertion through [`Extend`] is only offered for these, since
/// `extend` has no way to report a failed comparison. The trait is sealed:
/// only [`Natural`] and [`FnComparator`] implement it.
///
/// ```compile_fail
/// use std::cmp::Ordering;
/// use collections_ext::compare::Comparator;
/// use collections_ext::heap::TotalComparator;
/// use collections_ext::CollectionError;
///
/// struct Picky;
///
/// impl Comparator<i32> for Picky {
///     fn compare(&self, a: &i32, b: &i32) -> Result<Ordering, CollectionError> {
///         Ok(a.cmp(b))
///     }
/// }
///
/// impl TotalComparator<i32> for Picky {}
/// ```
pub trait TotalComparator<T>: Comparator<T> + private::Sealed {}

impl<T: Ord> TotalComparator<T> for Natural {}

impl<T, F> TotalComparator<T> for FnComparator<F> where F: Fn(&T, &T) -> Ordering {}

/// Swaps performed by one sift, kept so a failed comparison can be undone.
/// Typical tree heights fit inline.
type SwapLog = SmallVec<[(usize, usize); 32]>;

#[inline]
pub(crate) const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
pub(crate) const fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub(crate) const fn right(index: usize) -> usize {
    2 * index + 2
}

/// A binary heap ordered by comparator `C` in direction `D`
///
/// Use the [`MinHeap`] and [`MaxHeap`] aliases and their named
/// constructors (`new`, `partial`, `with_comparator`) rather than naming
/// this type directly.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, D, C = Natural> {
    /// Level-order storage of the complete binary tree
    data: Vec<T>,
    comparator: C,
    _direction: PhantomData<fn() -> D>,
}

impl<T, D, C> BinaryHeap<T, D, C> {
    /// Creates an empty heap ordered by `comparator`
    pub fn from_comparator(comparator: C) -> Self {
        Self {
            data: Vec::new(),
            comparator,
            _direction: PhantomData,
        }
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in storage (level) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The backing storage in level order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the backing storage in level order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// The comparator this heap was built with
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T, D: Direction, C: Comparator<T>> BinaryHeap<T, D, C> {
    /// Pushes every element of `iter`, stopping at the first failure
    ///
    /// Elements pushed before the failure stay in the heap.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.push(item)?;
        }
        Ok(())
    }

    /// Consumes the heap, returning its elements in pop order
    pub fn into_sorted_vec(mut self) -> Result<Vec<T>, CollectionError> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while !self.data.is_empty() {
            sorted.push(self.pop()?);
        }
        Ok(sorted)
    }

    /// Checks the heap property at every index
    pub fn is_valid(&self) -> Result<bool, CollectionError> {
        for index in 1..self.data.len() {
            if self.favors(index, parent(index))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns true if the element at `a` belongs strictly above the one at `b`
    #[inline]
    fn favors(&self, a: usize, b: usize) -> Result<bool, CollectionError> {
        let ord = self.comparator.compare(&self.data[a], &self.data[b])?;
        Ok(D::favors(ord))
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize, log: &mut SwapLog) -> Result<(), CollectionError> {
        while index > 0 {
            let parent = parent(index);
            if self.favors(index, parent)? {
                self.data.swap(index, parent);
                log.push((index, parent));
                index = parent;
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize, log: &mut SwapLog) -> Result<(), CollectionError> {
        let len = self.data.len();
        loop {
            let left = left(index);
            if left >= len {
                break;
            }

            let right = right(index);
            let mut extreme = left;
            if right < len && self.favors(right, left)? {
                extreme = right;
            }

            if self.favors(extreme, index)? {
                self.data.swap(index, extreme);
                log.push((index, extreme));
                index = extreme;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn rollback(&mut self, log: &SwapLog) {
        for &(a, b) in log.iter().rev() {
            self.data.swap(a, b);
        }
    }
}

impl<T, D: Direction, C: Comparator<T>> Heap<T> for BinaryHeap<T, D, C> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) -> Result<(), CollectionError> {
        self.data.push(item);

        let mut log = SwapLog::new();
        if let Err(err) = self.sift_up(self.data.len() - 1, &mut log) {
            self.rollback(&log);
            self.data.pop();
            debug!(direction = D::NAME, len = self.data.len(), %err, "push rolled back");
            return Err(err);
        }
        Ok(())
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Result<T, CollectionError> {
        let Some(last) = self.data.len().checked_sub(1) else {
            return Err(CollectionError::EmptyCollection);
        };

        self.data.swap(0, last);
        let Some(root) = self.data.pop() else {
            return Err(CollectionError::EmptyCollection);
        };

        let mut log = SwapLog::new();
        if let Err(err) = self.sift_down(0, &mut log) {
            // Undo the sift, then put the root back in front of the old last element
            self.rollback(&log);
            self.data.push(root);
            self.data.swap(0, last);
            debug!(direction = D::NAME, len = self.data.len(), %err, "pop rolled back");
            return Err(err);
        }
        Ok(root)
    }
}

impl<T: Display, D, C> BinaryHeap<T, D, C> {
    /// Structural snapshot for a renderer: one entry per index, labelled
    /// with the element's `Display` output
    pub fn snapshot(&self) -> HeapSnapshot {
        let len = self.data.len();
        let label_at = |index: usize| (index < len).then(|| self.data[index].to_string());

        let entries = (0..len)
            .map(|index| HeapEntry {
                label: self.data[index].to_string(),
                left: label_at(left(index)),
                right: label_at(right(index)),
            })
            .collect();

        HeapSnapshot { entries }
    }
}

impl<T, D, C: Default> Default for BinaryHeap<T, D, C> {
    fn default() -> Self {
        Self::from_comparator(C::default())
    }
}

impl<T, D: Direction, C: TotalComparator<T>> Extend<T> for BinaryHeap<T, D, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            // Only the sealed total comparators reach here, and they never fail
            let _ = self.push(item);
        }
    }
}

impl<T, D: Direction, C: TotalComparator<T> + Default> FromIterator<T> for BinaryHeap<T, D, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<'a, T, D, C> IntoIterator for &'a BinaryHeap<T, D, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
