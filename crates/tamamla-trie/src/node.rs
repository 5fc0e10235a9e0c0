// Arena-backed trie node storage.
//
// Nodes live in a single Vec owned by the trie and refer to their children
// by arena index instead of owning pointers. This keeps the tree-ownership
// picture (every node has exactly one parent, no sharing, no cycles) while
// avoiding one heap allocation per node.

use tamamla_core::alphabet::ALPHABET_LEN;

/// Index of a node within the trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node is always the first entry in the arena.
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn from_index(index: usize) -> NodeId {
        NodeId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single trie node: one optional child slot per alphabet letter plus
/// the word-end flag.
///
/// A node reachable by following letters c1..ck from the root represents
/// the string c1..ck; `word_end` is true iff exactly that string was
/// inserted as a complete word.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) children: [Option<NodeId>; ALPHABET_LEN],
    pub(crate) word_end: bool,
}

impl Node {
    pub(crate) fn new() -> Self {
        Self {
            children: [None; ALPHABET_LEN],
            word_end: false,
        }
    }

    /// A node is a leaf when all 29 child slots are empty.
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.iter().all(|child| child.is_none())
    }
}
