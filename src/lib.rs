//! Small generic collections: binary heaps and a lowercase-ASCII trie
//!
//! # Features
//!
//! - **Binary Heap**: array-backed min-heap or max-heap over any element type,
//!   ordered by a comparator fixed at construction; O(log n) push and pop
//! - **Trie**: 26-way prefix tree over `'a'..='z'` with membership, prefix
//!   queries, deletion with pruning and bounded prefix enumeration
//! - **Snapshots**: both structures expose their shape for an external renderer
//!
//! # Example
//!
//! ```rust
//! use collections_ext::Heap;
//! use collections_ext::heap::MinHeap;
//! use collections_ext::trie::Trie;
//!
//! let mut heap = MinHeap::new();
//! heap.push(5).unwrap();
//! heap.push(3).unwrap();
//! assert_eq!(heap.pop(), Ok(3));
//!
//! let mut trie = Trie::new();
//! trie.add_words(["rainbow", "raincoat", "raindrop"]);
//! assert_eq!(trie.recommendations("rain", 2), vec!["rainbow", "raincoat"]);
//! ```

pub mod compare;
pub mod error;
pub mod heap;
pub mod snapshot;
pub mod traits;
pub mod trie;

// Re-export the main trait for convenience
pub use error::CollectionError;
pub use traits::Heap;
