//! Shared types for the tamamla Turkish prefix-completion engine.
//!
//! # Architecture
//!
//! - [`alphabet`] -- The fixed 29-letter Turkish alphabet and its
//!   letter-to-slot-index mapping, the ordering key for all trie traversal.

pub mod alphabet;

pub use alphabet::{ALPHABET, ALPHABET_LEN, InvalidCharacter};
