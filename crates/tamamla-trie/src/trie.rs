// The prefix trie: insertion and bounded depth-first prefix collection.

use tamamla_core::alphabet::{InvalidCharacter, letter_at, word_to_indices};

use crate::node::{Node, NodeId};

/// Outcome category of a prefix lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    /// No word in the trie starts with the queried prefix.
    NoMatch,
    /// The prefix matched a node with no children: the prefix itself is the
    /// only possible completion.
    ExactLeaf,
    /// The prefix matched an interior node; completions were collected by
    /// depth-first traversal.
    Matches,
}

/// Result of [`Trie::collect_with_prefix`].
///
/// `words` is in the exact order the depth-first traversal produced it:
/// shorter words before their extensions, siblings in alphabet order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixLookup {
    pub status: LookupStatus,
    pub words: Vec<String>,
}

impl PrefixLookup {
    fn no_match() -> Self {
        Self {
            status: LookupStatus::NoMatch,
            words: Vec::new(),
        }
    }
}

/// An ordered prefix tree over the 29-letter Turkish alphabet.
///
/// Built once by repeated [`insert`](Trie::insert) calls from a dictionary
/// source; read-only for the rest of the session. Insertion and descent are
/// O(word length); collection is O(visited subtree), bounded by the limit.
pub struct Trie {
    /// Node arena; the root lives at index 0 for the trie's whole lifetime.
    nodes: Vec<Node>,
    /// Number of distinct words inserted.
    word_count: usize,
}

impl Trie {
    /// Create an empty trie containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            word_count: 0,
        }
    }

    /// Insert a word, lazily creating one node per letter along its path
    /// and marking the final node as a word end.
    ///
    /// The whole word is validated against the alphabet before any node is
    /// created, so a failed insert leaves the trie structurally unchanged.
    /// Inserting the same word twice is a no-op.
    pub fn insert(&mut self, word: &str) -> Result<(), InvalidCharacter> {
        let indices = word_to_indices(word)?;

        let mut current = NodeId::ROOT;
        for &index in &indices {
            let slot = index as usize;
            current = match self.nodes[current.index()].children[slot] {
                Some(child) => child,
                None => {
                    let child = NodeId::from_index(self.nodes.len());
                    self.nodes.push(Node::new());
                    self.nodes[current.index()].children[slot] = Some(child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current.index()];
        if !node.word_end {
            node.word_end = true;
            self.word_count += 1;
        }
        Ok(())
    }

    /// Exact-word membership test.
    pub fn contains(&self, word: &str) -> Result<bool, InvalidCharacter> {
        let indices = word_to_indices(word)?;
        match self.descend(&indices) {
            Some(node) => Ok(self.nodes[node.index()].word_end),
            None => Ok(false),
        }
    }

    /// Number of distinct words inserted so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Collect up to `limit` words starting with `prefix`.
    ///
    /// Descends one node per prefix letter, then:
    ///
    /// - absent child slot on the way down -> [`LookupStatus::NoMatch`],
    ///   no words;
    /// - matched node has no children -> [`LookupStatus::ExactLeaf`], with
    ///   the prefix itself as the sole completion iff it is a word end;
    /// - otherwise a depth-first traversal in alphabet order, emitting the
    ///   accumulated string at every word-end node until the subtree is
    ///   exhausted or `limit` words have been emitted ->
    ///   [`LookupStatus::Matches`].
    ///
    /// `limit` bounds word emissions, not nodes visited. A limit of 0
    /// yields an empty `Matches` result without touching the trie. The
    /// empty prefix matches the root and enumerates the whole dictionary.
    pub fn collect_with_prefix(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<PrefixLookup, InvalidCharacter> {
        let indices = word_to_indices(prefix)?;

        if limit == 0 {
            return Ok(PrefixLookup {
                status: LookupStatus::Matches,
                words: Vec::new(),
            });
        }

        let Some(matched) = self.descend(&indices) else {
            return Ok(PrefixLookup::no_match());
        };

        if self.nodes[matched.index()].is_leaf() {
            let words = if self.nodes[matched.index()].word_end {
                vec![prefix.to_string()]
            } else {
                Vec::new()
            };
            return Ok(PrefixLookup {
                status: LookupStatus::ExactLeaf,
                words,
            });
        }

        let mut words = Vec::new();
        let mut remaining = limit;
        let mut accumulated = String::from(prefix);
        self.collect(matched, &mut accumulated, &mut remaining, &mut words);

        Ok(PrefixLookup {
            status: LookupStatus::Matches,
            words,
        })
    }

    /// Follow one child slot per index; `None` if any slot is absent.
    fn descend(&self, indices: &[u8]) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for &index in indices {
            current = self.nodes[current.index()].children[index as usize]?;
        }
        Some(current)
    }

    /// Depth-first collection with an accumulator threaded through the
    /// traversal. `remaining` is decremented per emitted word; traversal
    /// short-circuits as soon as it reaches zero.
    fn collect(
        &self,
        node_id: NodeId,
        accumulated: &mut String,
        remaining: &mut usize,
        out: &mut Vec<String>,
    ) {
        let node = &self.nodes[node_id.index()];
        if node.word_end {
            out.push(accumulated.clone());
            *remaining -= 1;
            if *remaining == 0 {
                return;
            }
        }

        for (slot, child) in node.children.iter().enumerate() {
            if let Some(child) = *child {
                accumulated.push(letter_at(slot));
                self.collect(child, accumulated, remaining, out);
                accumulated.pop();
                if *remaining == 0 {
                    return;
                }
            }
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
