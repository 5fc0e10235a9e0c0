//! Turkish prefix-completion engine.
//!
//! Combines the dictionary trie from `tamamla-trie` with a word-frequency
//! table to produce bounded, frequency-ranked completion lists for whatever
//! prefix a user is currently typing.
//!
//! # Architecture
//!
//! - [`frequency`] -- Word-frequency table and its plain-text loader
//! - [`wordlist`] -- Word-list loader populating the trie
//! - [`ranker`] -- Frequency-descending, length-capped ranking
//! - [`session`] -- Edit-session state machine for the interactive loop
//! - [`handle`] -- [`CompletionHandle`], the top-level integration point

pub mod frequency;
pub mod handle;
pub mod ranker;
pub mod session;
pub mod wordlist;

pub use handle::CompletionHandle;
