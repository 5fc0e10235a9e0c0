// CompletionHandle: top-level integration point for the completion engine.
//
// Owns the dictionary trie and the frequency table and exposes the single
// suggest() entry point the interactive loop needs. Both structures are
// built once at construction and read-only afterwards; the handle is
// strictly sequential, no locking discipline required.

use std::io::BufRead;

use tamamla_core::alphabet::InvalidCharacter;
use tamamla_trie::Trie;

use crate::frequency::{FrequencyError, FrequencyTable};
use crate::ranker::{self, DEFAULT_DISPLAY_CAP};
use crate::wordlist::{self, InvalidWordPolicy, WordListError};

/// Safety ceiling on the raw completions gathered per lookup before
/// ranking. Effectively unbounded for real dictionaries; it only exists so
/// a degenerate query (e.g. a one-letter prefix over a huge word list)
/// cannot materialize the entire dictionary.
pub const MAX_RAW_SUGGESTIONS: usize = 100_000;

/// Error type for handle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum HandleError {
    /// The word list could not be loaded.
    #[error("failed to load word list: {0}")]
    WordList(#[from] WordListError),

    /// The frequency table could not be loaded.
    #[error("failed to load frequency table: {0}")]
    Frequency(#[from] FrequencyError),
}

/// Top-level handle that owns the trie and the frequency table.
pub struct CompletionHandle {
    trie: Trie,
    frequencies: FrequencyTable,

    /// Maximum number of ranked suggestions to return.
    max_suggestions: usize,
}

impl CompletionHandle {
    /// Assemble a handle from already-built components.
    pub fn new(trie: Trie, frequencies: FrequencyTable) -> Self {
        Self {
            trie,
            frequencies,
            max_suggestions: DEFAULT_DISPLAY_CAP,
        }
    }

    /// Build a handle from a word-list stream and an optional
    /// frequency-table stream (absent table: every word scores 0).
    pub fn from_readers<W: BufRead, F: BufRead>(
        words: W,
        frequencies: Option<F>,
        policy: InvalidWordPolicy,
    ) -> Result<Self, HandleError> {
        let mut trie = Trie::new();
        wordlist::load_words(&mut trie, words, policy)?;
        let frequencies = match frequencies {
            Some(reader) => FrequencyTable::from_reader(reader)?,
            None => FrequencyTable::new(),
        };
        Ok(Self::new(trie, frequencies))
    }

    /// Set the maximum number of ranked suggestions returned by
    /// [`suggest`](Self::suggest).
    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.max_suggestions = max_suggestions;
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Ranked completions for a prefix: trie lookup (bounded by
    /// [`MAX_RAW_SUGGESTIONS`]) followed by frequency ranking and
    /// truncation. An empty prefix yields an empty list -- nothing is being
    /// typed, so nothing is suggested.
    pub fn suggest(&self, prefix: &str) -> Result<Vec<String>, InvalidCharacter> {
        if prefix.is_empty() {
            return Ok(Vec::new());
        }
        let lookup = self.trie.collect_with_prefix(prefix, MAX_RAW_SUGGESTIONS)?;
        Ok(ranker::rank_suggestions(
            lookup.words,
            &self.frequencies,
            self.max_suggestions,
        ))
    }
}
