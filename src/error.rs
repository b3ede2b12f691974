//! Error type shared by the collections in this crate

use thiserror::Error;

/// Error type for collection operations
///
/// Only heaps produce errors. Trie operations treat out-of-contract input
/// (empty words, characters outside `'a'..='z'`) as a silent no-op.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// The collection holds no elements (e.g. `pop` on an empty heap)
    #[error("collection is empty")]
    EmptyCollection,
    /// Two elements could not be ordered by the active comparator
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
