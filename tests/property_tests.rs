//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and check the
//! collections against a simple model after every step.

use std::collections::BTreeSet;

use collections_ext::heap::{MaxHeap, MinHeap};
use collections_ext::trie::Trie;
use collections_ext::Heap;
use proptest::prelude::*;

/// Test that all popped elements come out in heap order
fn test_pop_order_invariant<H: Heap<i32> + Default>(
    values: Vec<i32>,
    in_order: fn(i32, i32) -> bool,
) -> Result<(), TestCaseError> {
    let mut heap = H::default();

    for val in &values {
        heap.push(*val).unwrap();
    }

    let mut last = None;
    while !heap.is_empty() {
        let value = heap.pop().unwrap();
        if let Some(prev) = last {
            prop_assert!(in_order(prev, value), "popped {} after {}", value, prev);
        }
        last = Some(value);
    }

    Ok(())
}

/// Test that peek always agrees with the model's extreme element
fn test_push_pop_invariant<H: Heap<i32> + Default>(
    ops: Vec<(bool, i32)>,
    extreme: fn(&[i32]) -> Option<i32>,
) -> Result<(), TestCaseError> {
    let mut heap = H::default();
    let mut inserted = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !heap.is_empty() {
            let popped = heap.pop().unwrap();
            prop_assert_eq!(Some(popped), extreme(&inserted));
            let pos = inserted.iter().position(|&p| p == popped).unwrap();
            inserted.swap_remove(pos);
        } else {
            heap.push(value).unwrap();
            inserted.push(value);
        }

        prop_assert_eq!(heap.peek().copied(), extreme(&inserted));
    }

    Ok(())
}

/// Test len() is always correct
fn test_len_invariant<H: Heap<i32> + Default>(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = H::default();
    let mut expected_len = 0;

    for (should_pop, value) in ops {
        if should_pop {
            if heap.pop().is_ok() {
                expected_len -= 1;
            }
        } else {
            heap.push(value).unwrap();
            expected_len += 1;
        }

        prop_assert_eq!(heap.len(), expected_len);
        prop_assert_eq!(heap.is_empty(), expected_len == 0);
    }

    Ok(())
}

fn smallest(values: &[i32]) -> Option<i32> {
    values.iter().min().copied()
}

fn largest(values: &[i32]) -> Option<i32> {
    values.iter().max().copied()
}

#[derive(Debug, Clone)]
enum TrieOp {
    Add(String),
    Remove(String),
}

fn word() -> impl Strategy<Value = String> {
    // A tiny alphabet makes shared prefixes and repeats likely
    "[a-d]{1,6}"
}

fn trie_op() -> impl Strategy<Value = TrieOp> {
    prop_oneof![
        3 => word().prop_map(TrieOp::Add),
        2 => word().prop_map(TrieOp::Remove),
    ]
}

proptest! {
    #[test]
    fn test_min_pop_order_invariant(values in prop::collection::vec(-100i32..100, 1..100)) {
        test_pop_order_invariant::<MinHeap<i32>>(values, |a, b| a <= b)?;
    }

    #[test]
    fn test_max_pop_order_invariant(values in prop::collection::vec(-100i32..100, 1..100)) {
        test_pop_order_invariant::<MaxHeap<i32>>(values, |a, b| a >= b)?;
    }

    #[test]
    fn test_min_push_pop_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_push_pop_invariant::<MinHeap<i32>>(ops, smallest)?;
    }

    #[test]
    fn test_max_push_pop_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_push_pop_invariant::<MaxHeap<i32>>(ops, largest)?;
    }

    #[test]
    fn test_min_len_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_len_invariant::<MinHeap<i32>>(ops)?;
    }

    #[test]
    fn test_max_len_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_len_invariant::<MaxHeap<i32>>(ops)?;
    }

    #[test]
    fn test_heap_property_after_every_push(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        let mut heap = MinHeap::new();
        for value in values {
            heap.push(value).unwrap();
            prop_assert_eq!(heap.is_valid(), Ok(true));
        }
    }

    #[test]
    fn test_trie_matches_set_model(ops in prop::collection::vec(trie_op(), 0..80)) {
        let mut trie = Trie::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                TrieOp::Add(word) => {
                    prop_assert_eq!(trie.add_word(&word), model.insert(word));
                }
                TrieOp::Remove(word) => {
                    prop_assert_eq!(trie.remove(&word), model.remove(&word));
                }
            }
            prop_assert_eq!(trie.len(), model.len());
        }

        // Pre-order alphabetical traversal is lexicographic order
        let all: Vec<String> = model.iter().cloned().collect();
        prop_assert_eq!(trie.recommendations("", usize::MAX), all);

        for word in &model {
            prop_assert!(trie.contains(word));
            for end in 1..=word.len() {
                prop_assert!(trie.starts_with(&word[..end]));
            }
        }
        prop_assert_eq!(trie.starts_with(""), !model.is_empty());
    }

    #[test]
    fn test_trie_has_no_dead_nodes(
        words in prop::collection::vec(word(), 0..40),
        removals in prop::collection::vec(word(), 0..40),
    ) {
        let mut trie: Trie = words.iter().collect();
        for word in &removals {
            trie.remove(word);
        }

        // Every leaf of the rendered tree must be a stored word
        let snapshot = trie.snapshot();
        for node in snapshot.nodes.iter().skip(1) {
            let has_child = snapshot.edges().any(|(parent, _)| parent == node.id);
            prop_assert!(node.terminal || has_child, "dead node {}", node.id);
        }
    }

    #[test]
    fn test_recommendations_bounded(
        words in prop::collection::vec(word(), 0..40),
        prefix in "[a-d]{0,3}",
        n in 0usize..10,
    ) {
        let trie: Trie = words.iter().collect();
        let found = trie.recommendations(&prefix, n);

        prop_assert!(found.len() <= n);
        let expected: Vec<String> = words
            .iter()
            .filter(|w| w.starts_with(prefix.as_str()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .take(n)
            .collect();
        prop_assert_eq!(found, expected);
    }
}
