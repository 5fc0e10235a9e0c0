//! Prefix trie engine for the tamamla completion engine.
//!
//! Stores a dictionary of Turkish words and answers "all words with this
//! prefix" queries, bounded by a caller-supplied limit. The trie is built
//! once from a word list at startup and treated as read-only afterwards.
//!
//! # Architecture
//!
//! - [`node`] -- Arena-backed node storage (one child slot per letter)
//! - [`trie`] -- Insertion and bounded depth-first prefix collection

pub mod node;
pub mod trie;

pub use node::NodeId;
pub use trie::{LookupStatus, PrefixLookup, Trie};
