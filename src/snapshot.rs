//! Read-only structural snapshots for renderers
//!
//! Neither collection renders itself. Instead each one can produce a
//! snapshot of its shape (nodes, parent-to-child edges and a visual
//! [`Emphasis`] per node) that an external renderer turns into whatever
//! format it likes.
//!
//! Heap snapshots are keyed by element label, so equal elements share a
//! label. Trie snapshots give every rendered node a unique id because the
//! same letter appears at many positions in the tree.

/// Visual attribute attached to a rendered node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Highlighted node: every heap element, every terminal trie node
    Strong,
    /// Plain node: the trie root and non-terminal trie nodes
    Normal,
}

/// One heap slot and its children, by label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry {
    /// Label of the element at this index
    pub label: String,
    /// Label of the element at `2i + 1`, if that index exists
    pub left: Option<String>,
    /// Label of the element at `2i + 2`, if that index exists
    pub right: Option<String>,
}

/// Snapshot of a binary heap in storage order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeapSnapshot {
    /// One entry per index of the backing storage
    pub entries: Vec<HeapEntry>,
}

impl HeapSnapshot {
    /// All heap nodes share one uniform attribute
    pub fn emphasis(&self) -> Emphasis {
        Emphasis::Strong
    }

    /// Parent-to-child edges as `(parent label, child label)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().flat_map(|entry| {
            [entry.left.as_deref(), entry.right.as_deref()]
                .into_iter()
                .flatten()
                .map(move |child| (entry.label.as_str(), child))
        })
    }
}

/// One rendered trie node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNodeView {
    /// Unique id of this rendered node
    pub id: String,
    /// The letter on the edge into this node, or `ROOT`
    pub label: String,
    /// Whether a stored word ends here
    pub terminal: bool,
}

impl TrieNodeView {
    /// Terminal nodes are highlighted
    pub fn emphasis(&self) -> Emphasis {
        if self.terminal {
            Emphasis::Strong
        } else {
            Emphasis::Normal
        }
    }
}

/// A parent-to-child edge between two rendered trie nodes, by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Id of the node closer to the root
    pub parent: String,
    /// Id of the node one letter deeper
    pub child: String,
}

/// Snapshot of a trie in pre-order, alphabetical
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieSnapshot {
    /// The root first, then every node in traversal order
    pub nodes: Vec<TrieNodeView>,
    /// Parent-to-child edges in the same order as `nodes`
    pub edges: Vec<Edge>,
}

impl TrieSnapshot {
    /// Parent-to-child edges as `(parent id, child id)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges
            .iter()
            .map(|edge| (edge.parent.as_str(), edge.child.as_str()))
    }

    /// Looks up a rendered node by id
    pub fn node(&self, id: &str) -> Option<&TrieNodeView> {
        self.nodes.iter().find(|node| node.id == id)
    }
}
