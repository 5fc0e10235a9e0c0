// Frequency ranking of raw suggestion sequences.

use std::cmp::Reverse;

use crate::frequency::FrequencyTable;

/// Default maximum number of ranked suggestions shown to the user.
pub const DEFAULT_DISPLAY_CAP: usize = 10;

/// Turn a raw suggestion sequence into a frequency-descending list of at
/// most `display_cap` words.
///
/// The sort is stable: words with equal frequency keep their relative
/// order from the input, which preserves the trie's depth-first
/// alphabetical order as the tie-break. An empty input produces an empty
/// list; that is the caller's "no suggestions" case, not an error.
pub fn rank_suggestions(
    raw: Vec<String>,
    frequencies: &FrequencyTable,
    display_cap: usize,
) -> Vec<String> {
    let mut ranked = raw;
    ranked.sort_by_key(|word| Reverse(frequencies.get(word)));
    ranked.truncate(display_cap);
    ranked
}
