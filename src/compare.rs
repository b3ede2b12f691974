//! Ordering functions injected into heaps at construction
//!
//! A heap never decides at runtime how to order its elements: the comparator
//! is part of its type. Three comparators are provided:
//!
//! - [`Natural`]: the element's total order (`T: Ord`), never fails
//! - [`Partial`]: the element's partial order (`T: PartialOrd`), fails with
//!   [`CollectionError::InvalidArgument`] on incomparable pairs such as `NaN`
//! - [`FnComparator`]: any `Fn(&T, &T) -> Ordering` closure
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use collections_ext::compare::{Comparator, FnComparator, Natural, Partial};
//!
//! assert_eq!(Natural.compare(&1, &2), Ok(Ordering::Less));
//! assert!(Partial.compare(&f64::NAN, &1.0).is_err());
//!
//! let by_len = FnComparator::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! assert_eq!(by_len.compare(&"abc", &"z"), Ok(Ordering::Greater));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::CollectionError;

/// An ordering function over `T`
///
/// Returns `Err(CollectionError::InvalidArgument)` when the two elements
/// cannot be ordered. Total-order comparators always return `Ok`.
pub trait Comparator<T> {
    /// Compares `a` against `b`
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, CollectionError>;
}

/// Natural total order of `T: Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, CollectionError> {
        Ok(a.cmp(b))
    }
}

/// Natural partial order of `T: PartialOrd`
///
/// Incomparable pairs fail instead of being silently treated as equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Partial;

impl<T: PartialOrd> Comparator<T> for Partial {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, CollectionError> {
        a.partial_cmp(b)
            .ok_or(CollectionError::InvalidArgument("elements are not comparable"))
    }
}

/// Wraps a closure as a [`Comparator`]
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    f: F,
}

impl<F> FnComparator<F> {
    /// Wraps `f`
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, CollectionError> {
        Ok((self.f)(a, b))
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_matches_ord() {
        assert_eq!(Natural.compare(&"apple", &"banana"), Ok(Ordering::Less));
        assert_eq!(Natural.compare(&7, &7), Ok(Ordering::Equal));
    }

    #[test]
    fn test_partial_rejects_nan() {
        assert_eq!(Partial.compare(&1.5, &2.5), Ok(Ordering::Less));
        assert_eq!(
            Partial.compare(&1.0, &f64::NAN),
            Err(CollectionError::InvalidArgument("elements are not comparable"))
        );
    }

    #[test]
    fn test_fn_comparator_reverses() {
        let reversed = FnComparator::new(|a: &i32, b: &i32| b.cmp(a));
        assert_eq!(reversed.compare(&1, &2), Ok(Ordering::Greater));
    }
}
