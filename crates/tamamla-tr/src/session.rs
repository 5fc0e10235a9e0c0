// Edit-session state machine.
//
// Tracks the word currently being typed and the committed text behind it.
// The session is pure: the ranked suggestion list for the current word is
// passed into `apply` by the driving loop, never fetched from here, so the
// machine is testable without a trie or frequency table.

use tamamla_core::alphabet::is_turkish_letter;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No partial word.
    Idle,
    /// Accumulating letters into the current word.
    Editing,
    /// The current word was just replaced wholesale by a chosen suggestion.
    SuggestionSelected,
}

/// One input unit from the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// An alphabet character. Characters outside the alphabet are ignored.
    Letter(char),
    /// Remove the last character of the current word.
    Backspace,
    /// Pick the ranked suggestion at this 1-based position (1..=9).
    /// Out-of-range positions are a silent no-op, not an error.
    Select(u8),
    /// Whitespace / word separator: commit the current word.
    Separator,
}

/// The editing session: current partial word plus committed text.
#[derive(Debug, Default)]
pub struct EditSession {
    current_word: String,
    committed: String,
    selected: bool,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.current_word.is_empty() {
            SessionState::Idle
        } else if self.selected {
            SessionState::SuggestionSelected
        } else {
            SessionState::Editing
        }
    }

    /// The word currently being typed (the query prefix for suggestions).
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// Text committed so far, words separated by single spaces.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Committed text plus the in-progress word, for rendering.
    pub fn text(&self) -> String {
        if self.current_word.is_empty() {
            self.committed.clone()
        } else if self.committed.is_empty() {
            self.current_word.clone()
        } else {
            format!("{} {}", self.committed, self.current_word)
        }
    }

    /// Feed one event through the machine. `ranked` is the suggestion list
    /// currently displayed for [`current_word`](Self::current_word).
    pub fn apply(&mut self, event: SessionEvent, ranked: &[String]) {
        match event {
            SessionEvent::Letter(c) => {
                if is_turkish_letter(c) {
                    self.current_word.push(c);
                    self.selected = false;
                }
            }
            SessionEvent::Backspace => {
                self.current_word.pop();
                self.selected = false;
            }
            SessionEvent::Select(position) => {
                if self.current_word.is_empty() {
                    return; // nothing to complete
                }
                let index = position as usize;
                if index >= 1 && index <= ranked.len() {
                    self.current_word = ranked[index - 1].clone();
                    self.selected = true;
                }
            }
            SessionEvent::Separator => {
                if !self.current_word.is_empty() {
                    if !self.committed.is_empty() {
                        self.committed.push(' ');
                    }
                    self.committed.push_str(&self.current_word);
                    self.current_word.clear();
                }
                self.selected = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn type_word(session: &mut EditSession, word: &str) {
        for c in word.chars() {
            session.apply(SessionEvent::Letter(c), &[]);
        }
    }

    // -- Letter / backspace transitions --

    #[test]
    fn starts_idle() {
        let session = EditSession::new();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.current_word(), "");
        assert_eq!(session.text(), "");
    }

    #[test]
    fn letters_enter_editing() {
        let mut session = EditSession::new();
        type_word(&mut session, "el");
        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(session.current_word(), "el");
    }

    #[test]
    fn non_alphabet_letters_are_ignored() {
        let mut session = EditSession::new();
        session.apply(SessionEvent::Letter('q'), &[]);
        session.apply(SessionEvent::Letter('!'), &[]);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.current_word(), "");
    }

    #[test]
    fn backspace_pops_and_empties_to_idle() {
        let mut session = EditSession::new();
        type_word(&mut session, "ev");
        session.apply(SessionEvent::Backspace, &[]);
        assert_eq!(session.current_word(), "e");
        assert_eq!(session.state(), SessionState::Editing);
        session.apply(SessionEvent::Backspace, &[]);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn backspace_in_idle_is_a_no_op() {
        let mut session = EditSession::new();
        session.apply(SessionEvent::Backspace, &[]);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.text(), "");
    }

    // -- Suggestion selection --

    #[test]
    fn select_replaces_word_wholesale() {
        let mut session = EditSession::new();
        type_word(&mut session, "el");
        session.apply(SessionEvent::Select(2), &ranked(&["el", "elma"]));
        assert_eq!(session.current_word(), "elma");
        assert_eq!(session.state(), SessionState::SuggestionSelected);
    }

    #[test]
    fn out_of_range_select_is_a_no_op() {
        let mut session = EditSession::new();
        type_word(&mut session, "el");
        session.apply(SessionEvent::Select(3), &ranked(&["el", "elma"]));
        assert_eq!(session.current_word(), "el");
        assert_eq!(session.state(), SessionState::Editing);
    }

    #[test]
    fn select_with_no_word_is_a_no_op() {
        let mut session = EditSession::new();
        session.apply(SessionEvent::Select(1), &ranked(&["ev"]));
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.current_word(), "");
    }

    #[test]
    fn letter_after_selection_returns_to_editing() {
        let mut session = EditSession::new();
        type_word(&mut session, "e");
        session.apply(SessionEvent::Select(1), &ranked(&["ev"]));
        assert_eq!(session.state(), SessionState::SuggestionSelected);
        session.apply(SessionEvent::Letter('e'), &[]);
        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(session.current_word(), "eve");
    }

    // -- Commit --

    #[test]
    fn separator_commits_and_resets() {
        let mut session = EditSession::new();
        type_word(&mut session, "ev");
        session.apply(SessionEvent::Separator, &[]);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.committed(), "ev");
        assert_eq!(session.current_word(), "");

        type_word(&mut session, "elma");
        session.apply(SessionEvent::Separator, &[]);
        assert_eq!(session.committed(), "ev elma");
    }

    #[test]
    fn separator_in_idle_does_not_pad_text() {
        let mut session = EditSession::new();
        session.apply(SessionEvent::Separator, &[]);
        session.apply(SessionEvent::Separator, &[]);
        assert_eq!(session.committed(), "");
    }

    #[test]
    fn text_joins_committed_and_current_word() {
        let mut session = EditSession::new();
        type_word(&mut session, "ev");
        session.apply(SessionEvent::Separator, &[]);
        type_word(&mut session, "el");
        assert_eq!(session.text(), "ev el");
    }

    #[test]
    fn select_then_commit_uses_the_suggestion() {
        let mut session = EditSession::new();
        type_word(&mut session, "e");
        session.apply(SessionEvent::Select(1), &ranked(&["elma"]));
        session.apply(SessionEvent::Separator, &[]);
        assert_eq!(session.committed(), "elma");
    }
}
