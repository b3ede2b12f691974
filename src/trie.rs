//! Prefix tree over lowercase ASCII words
//!
//! Every node owns one child slot per letter `'a'..='z'` and a flag marking
//! whether the path from the root spells a stored word. Words with shared
//! prefixes share nodes.
//!
//! Only the 26 lowercase ASCII letters are supported. A word containing any
//! other character is rejected as a whole: inserting or removing it does
//! nothing and querying it finds nothing.
//!
//! # Time Complexity
//!
//! With `L` the length of the word or prefix:
//!
//! | Operation         | Complexity        |
//! |-------------------|-------------------|
//! | `add_word`        | O(L)              |
//! | `contains`        | O(L)              |
//! | `starts_with`     | O(L)              |
//! | `remove`          | O(L)              |
//! | `recommendations` | O(L + visited)    |
//!
//! # Example
//!
//! ```rust
//! use collections_ext::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add_words(["water", "wafer", "watermelon"]);
//!
//! assert!(trie.contains("water"));
//! assert!(trie.starts_with("wat"));
//!
//! trie.remove("water");
//! assert!(!trie.contains("water"));
//! assert!(trie.contains("watermelon"));
//! assert_eq!(trie.recommendations("wa", 5), vec!["wafer", "watermelon"]);
//! ```

use tracing::{debug, trace};

use crate::snapshot::{Edge, TrieNodeView, TrieSnapshot};

/// Number of child slots per node, one per lowercase letter
pub const ALPHABET_SIZE: usize = 26;

const ROOT_ID: &str = "ROOT";

#[inline]
fn is_alphabetic(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_lowercase())
}

#[inline]
fn slot(byte: u8) -> usize {
    debug_assert!(byte.is_ascii_lowercase());
    (byte - b'a') as usize
}

#[inline]
fn letter(slot: usize) -> char {
    (b'a' + slot as u8) as char
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<Box<Node>>; ALPHABET_SIZE],
    /// The number of children which are Some rather than None.
    child_count: u8,
    is_word: bool,
}

impl Node {
    fn child(&self, slot: usize) -> Option<&Node> {
        self.children[slot].as_deref()
    }

    fn child_or_insert(&mut self, slot: usize) -> &mut Node {
        if self.children[slot].is_none() {
            self.child_count += 1;
        }
        self.children[slot].get_or_insert_with(Box::default)
    }

    fn take_child(&mut self, slot: usize) -> Option<Box<Node>> {
        self.children[slot].take().map(|node| {
            self.child_count -= 1;
            node
        })
    }

    /// Children in increasing letter order
    fn children(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| child.as_deref().map(|child| (slot, child)))
    }

    /// A non-root node with no word and no children must not stay in the tree
    fn is_dead(&self) -> bool {
        !self.is_word && self.child_count == 0
    }
}

/// A set of lowercase ASCII words stored as a prefix tree
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: Node,
    /// Number of distinct stored words
    len: usize,
}

impl Trie {
    /// Creates an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored words
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no word is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every word
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.len = 0;
    }

    /// Stores `word`, creating the nodes along its path as needed
    ///
    /// Returns true if the word was not already stored. Adding a word twice
    /// does not count it twice. The empty word and words with characters
    /// outside `'a'..='z'` are ignored.
    pub fn add_word(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if !is_alphabetic(word) {
            debug!(word, "ignoring word outside a-z");
            return false;
        }

        let node = word
            .bytes()
            .fold(&mut self.root, |node, b| node.child_or_insert(slot(b)));
        if node.is_word {
            return false;
        }

        node.is_word = true;
        self.len += 1;
        true
    }

    /// Stores every word of `words`
    pub fn add_words<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    /// Returns true if `word` is stored
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.find(word).is_some_and(|node| node.is_word)
    }

    /// Returns true if some stored word starts with `prefix`
    ///
    /// The empty prefix matches as soon as one word is stored.
    pub fn starts_with(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return self.len > 0;
        }
        self.find(prefix).is_some()
    }

    /// Removes `word`, pruning the nodes it no longer needs
    ///
    /// Returns true if the word was stored. Prefixes of stored words that
    /// were never added themselves are left alone.
    pub fn remove(&mut self, word: &str) -> bool {
        if word.is_empty() || !is_alphabetic(word) {
            return false;
        }

        let removed = remove_from(&mut self.root, word.as_bytes());
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns up to `n` stored words starting with `prefix`
    ///
    /// Words come in pre-order over the subtree below `prefix`, visiting
    /// letters alphabetically, so the prefix itself (if stored) comes
    /// first and the result is in lexicographic order. No other ranking is
    /// applied.
    pub fn recommendations(&self, prefix: &str, n: usize) -> Vec<String> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };
        if n == 0 {
            return Vec::new();
        }

        let mut words = Vec::with_capacity(n.min(self.len));
        if start.is_word {
            words.push(prefix.to_owned());
        }

        let mut buf = String::from(prefix);
        collect_words(start, &mut buf, &mut words, n);
        words
    }

    /// Structural snapshot for a renderer
    ///
    /// The root is rendered as `ROOT`. Every other node gets the id
    /// `{letter}_{depth}_{counter}`, unique across the snapshot.
    pub fn snapshot(&self) -> TrieSnapshot {
        let mut snapshot = TrieSnapshot::default();
        snapshot.nodes.push(TrieNodeView {
            id: ROOT_ID.to_owned(),
            label: ROOT_ID.to_owned(),
            terminal: false,
        });

        let mut counter = 0;
        describe(&self.root, ROOT_ID, 1, &mut counter, &mut snapshot);
        snapshot
    }

    /// Walks the path spelled by `key`
    fn find(&self, key: &str) -> Option<&Node> {
        if !is_alphabetic(key) {
            return None;
        }
        key.bytes()
            .try_fold(&self.root, |node, b| node.child(slot(b)))
    }
}

/// Clears the word flag at the end of `key` below `node`, detaching every
/// node left dead on the way back up
fn remove_from(node: &mut Node, key: &[u8]) -> bool {
    let Some((&first, rest)) = key.split_first() else {
        if !node.is_word {
            return false;
        }
        node.is_word = false;
        return true;
    };

    let slot = slot(first);
    let Some(child) = node.children[slot].as_deref_mut() else {
        return false;
    };
    if !remove_from(child, rest) {
        return false;
    }

    if child.is_dead() {
        node.take_child(slot);
        trace!(letter = %letter(slot), remaining = rest.len(), "pruned trie node");
    }
    true
}

fn collect_words(node: &Node, buf: &mut String, words: &mut Vec<String>, limit: usize) {
    for (slot, child) in node.children() {
        if words.len() >= limit {
            return;
        }

        buf.push(letter(slot));
        if child.is_word {
            words.push(buf.clone());
        }
        collect_words(child, buf, words, limit);
        buf.pop();
    }
}

fn describe(node: &Node, parent: &str, depth: usize, counter: &mut usize, out: &mut TrieSnapshot) {
    for (slot, child) in node.children() {
        let label = letter(slot).to_string();
        let id = format!("{label}_{depth}_{counter}");
        *counter += 1;

        out.nodes.push(TrieNodeView {
            id: id.clone(),
            label,
            terminal: child.is_word,
        });
        out.edges.push(Edge {
            parent: parent.to_owned(),
            child: id.clone(),
        });
        describe(child, &id, depth + 1, counter, out);
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_words(iter);
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.add_words(iter);
        trie
    }
}
