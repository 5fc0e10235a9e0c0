// Word-list loader: populates the trie from a plain-text stream.
//
// Input format: one line per record, a line may contain several
// whitespace-separated words, each inserted individually. The trie only
// reports invalid-character failures; whether to skip the word or abort
// the whole load is the caller's policy and is decided here.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tamamla_core::alphabet::InvalidCharacter;
use tamamla_trie::Trie;

/// What to do when a word in the list contains a character outside the
/// alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWordPolicy {
    /// Count the word as skipped and keep loading.
    Skip,
    /// Stop and surface the failure.
    Abort,
}

/// Counters reported by a completed load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Words inserted into the trie (duplicates included).
    pub inserted: usize,
    /// Words dropped under [`InvalidWordPolicy::Skip`].
    pub skipped: usize,
}

/// Error type for word-list loading failures.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// A word was rejected by the trie under [`InvalidWordPolicy::Abort`].
    #[error("invalid word {word:?}: {source}")]
    InvalidWord {
        word: String,
        source: InvalidCharacter,
    },

    /// The underlying stream could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
}

/// Insert every word of the stream into `trie`. Whitespace-only lines are
/// skipped.
pub fn load_words<R: BufRead>(
    trie: &mut Trie,
    reader: R,
    policy: InvalidWordPolicy,
) -> Result<LoadStats, WordListError> {
    let mut stats = LoadStats::default();

    for line in reader.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            match trie.insert(word) {
                Ok(()) => stats.inserted += 1,
                Err(source) => match policy {
                    InvalidWordPolicy::Skip => stats.skipped += 1,
                    InvalidWordPolicy::Abort => {
                        return Err(WordListError::InvalidWord {
                            word: word.to_string(),
                            source,
                        });
                    }
                },
            }
        }
    }

    Ok(stats)
}

/// Load a word list from a file on disk.
pub fn load_words_from_path(
    trie: &mut Trie,
    path: &Path,
    policy: InvalidWordPolicy,
) -> Result<LoadStats, WordListError> {
    let file = File::open(path).map_err(WordListError::Io)?;
    load_words(trie, BufReader::new(file), policy)
}
