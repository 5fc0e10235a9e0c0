// Word-frequency table and its plain-text loader.
//
// Input format: one record per line, exactly two whitespace-separated
// fields -- the word and a non-negative integer usage count. The table is
// built once at startup and only ever read afterwards.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;

/// Error type for frequency-table loading failures.
#[derive(Debug, thiserror::Error)]
pub enum FrequencyError {
    /// A line with a missing count field, extra fields, or a count that is
    /// not a non-negative integer.
    #[error("line {line_no}: malformed frequency record: {line:?}")]
    MalformedRecord { line_no: usize, line: String },

    /// The same word appeared on more than one line. The table is a
    /// mapping with unique keys; silent overwrite is not an option.
    #[error("line {line_no}: duplicate frequency entry for word {word:?}")]
    DuplicateWord { word: String, line_no: usize },

    /// The underlying stream could not be read.
    #[error("failed to read frequency table: {0}")]
    Io(#[from] io::Error),
}

/// A mapping from word to usage count.
///
/// Words absent from the table have an implicit frequency of 0; a miss is
/// expected and benign, never an error.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Create an empty table (every word scores 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Usage count for a word; 0 when the word is unknown.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Add an entry. Returns `false` and leaves the table unchanged if the
    /// word is already present.
    pub fn insert(&mut self, word: impl Into<String>, count: u64) -> bool {
        match self.counts.entry(word.into()) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(count);
                true
            }
        }
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Parse a table from a text stream.
    ///
    /// Whitespace-only lines are skipped. Anything other than exactly two
    /// fields per line, or a count that does not parse as an unsigned
    /// integer, is a [`FrequencyError::MalformedRecord`]; a repeated word
    /// is a [`FrequencyError::DuplicateWord`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, FrequencyError> {
        let mut table = Self::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;

            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue; // blank line
            };
            let count = fields
                .next()
                .and_then(|field| field.parse::<u64>().ok())
                .ok_or_else(|| FrequencyError::MalformedRecord {
                    line_no,
                    line: line.clone(),
                })?;
            if fields.next().is_some() {
                return Err(FrequencyError::MalformedRecord { line_no, line });
            }

            if !table.insert(word, count) {
                return Err(FrequencyError::DuplicateWord {
                    word: word.to_string(),
                    line_no,
                });
            }
        }

        Ok(table)
    }

    /// Parse a table from a file on disk.
    pub fn from_path(path: &Path) -> Result<Self, FrequencyError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> Result<FrequencyTable, FrequencyError> {
        FrequencyTable::from_reader(Cursor::new(input))
    }

    // -- Table tests --

    #[test]
    fn missing_word_scores_zero() {
        let table = FrequencyTable::new();
        assert_eq!(table.get("ev"), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn insert_rejects_duplicate() {
        let mut table = FrequencyTable::new();
        assert!(table.insert("ev", 100));
        assert!(!table.insert("ev", 7));
        assert_eq!(table.get("ev"), 100);
        assert_eq!(table.len(), 1);
    }

    // -- Loader tests --

    #[test]
    fn parses_well_formed_table() {
        let table = parse("ev 100\nekmek 3\nel 0\n").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("ev"), 100);
        assert_eq!(table.get("ekmek"), 3);
        assert_eq!(table.get("el"), 0);
    }

    #[test]
    fn skips_blank_lines() {
        let table = parse("ev 100\n\n   \nel 5\n").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_count_is_malformed() {
        let err = parse("ev 100\nekmek\n").unwrap_err();
        match err {
            FrequencyError::MalformedRecord { line_no, .. } => assert_eq!(line_no, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_integer_count_is_malformed() {
        assert!(parse("ev yüz\n").is_err());
        assert!(parse("ev -3\n").is_err());
        assert!(parse("ev 1.5\n").is_err());
    }

    #[test]
    fn extra_fields_are_malformed() {
        let err = parse("ev 100 200\n").unwrap_err();
        assert!(matches!(
            err,
            FrequencyError::MalformedRecord { line_no: 1, .. }
        ));
    }

    #[test]
    fn duplicate_word_is_an_error() {
        let err = parse("ev 100\nel 5\nev 7\n").unwrap_err();
        match err {
            FrequencyError::DuplicateWord { word, line_no } => {
                assert_eq!(word, "ev");
                assert_eq!(line_no, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
