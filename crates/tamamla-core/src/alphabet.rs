// Turkish alphabet and the letter-to-slot-index mapping.

// ---------------------------------------------------------------------------
// The fixed letter domain
// ---------------------------------------------------------------------------

/// The 29 letters of the Turkish alphabet (lowercase), in collation order:
/// a b c ç d e f g ğ h ı i j k l m n o ö p r s ş t u ü v y z.
///
/// The position of a letter in this array is its slot index. Trie nodes
/// reserve one child slot per position, and depth-first traversal in
/// ascending slot order is what makes suggestion output deterministic.
pub const ALPHABET: [char; 29] = [
    'a', 'b', 'c', '\u{00E7}', 'd', 'e', 'f', 'g', '\u{011F}', 'h', '\u{0131}', 'i', 'j', 'k',
    'l', 'm', 'n', 'o', '\u{00F6}', 'p', 'r', 's', '\u{015F}', 't', 'u', '\u{00FC}', 'v', 'y',
    'z',
];

/// Number of letters in the alphabet (and of child slots per trie node).
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Error raised when a word or query prefix contains a character outside
/// the fixed 29-letter alphabet.
///
/// `position` is the character offset (not byte offset) of the offending
/// character within the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("character '{character}' at position {position} is not a Turkish letter")]
pub struct InvalidCharacter {
    pub character: char,
    pub position: usize,
}

// ---------------------------------------------------------------------------
// Mapping functions
// ---------------------------------------------------------------------------

/// Returns the slot index of a Turkish letter, or `None` for any character
/// outside the 29-letter domain (uppercase included -- the engine operates
/// on lowercase text only).
pub fn letter_index(c: char) -> Option<usize> {
    ALPHABET.iter().position(|&letter| letter == c)
}

/// Returns the letter occupying the given slot index.
///
/// Panics if `index >= ALPHABET_LEN`; callers obtain indices from
/// [`letter_index`] or [`word_to_indices`] and therefore stay in range.
pub fn letter_at(index: usize) -> char {
    ALPHABET[index]
}

/// Check whether a character is one of the 29 Turkish letters.
pub fn is_turkish_letter(c: char) -> bool {
    letter_index(c).is_some()
}

/// Map a whole word to its sequence of slot indices.
///
/// Fails with [`InvalidCharacter`] on the first character outside the
/// alphabet; nothing is reported about the rest of the word.
pub fn word_to_indices(word: &str) -> Result<Vec<u8>, InvalidCharacter> {
    word.chars()
        .enumerate()
        .map(|(position, character)| {
            letter_index(character)
                .map(|index| index as u8)
                .ok_or(InvalidCharacter {
                    character,
                    position,
                })
        })
        .collect()
}
