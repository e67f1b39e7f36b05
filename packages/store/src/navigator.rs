//! Card Navigator: the current-card cursor and the reveal flag.
//!
//! The cursor is always in `[0, len)` while the list is non-empty and is
//! inactive (held at 0) when it is empty. The reveal flag is scoped to the
//! current cursor position: advancing always hides the next card's meaning.

use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct CardState {
    cursor: usize,
    revealed: bool,
}

/// Handle over the shared cursor/reveal state.
#[derive(Clone, Default)]
pub struct CardNavigator {
    state: Arc<Mutex<CardState>>,
}

impl CardNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.state.lock().unwrap().cursor
    }

    pub fn revealed(&self) -> bool {
        self.state.lock().unwrap().revealed
    }

    /// Advance to the next card, wrapping modulo `len`. The next card
    /// always starts hidden. No-op on an empty list.
    pub fn next(&self, len: usize) {
        if len == 0 {
            return;
        }
        let mut state = self.state.lock().unwrap();
        state.cursor = (state.cursor + 1) % len;
        state.revealed = false;
    }

    /// Flip the reveal flag for the current card. No-op on an empty list.
    pub fn toggle_reveal(&self, len: usize) {
        if len == 0 {
            return;
        }
        let mut state = self.state.lock().unwrap();
        state.revealed = !state.revealed;
    }

    /// Back to the first card, hidden. Applied after every wholesale list
    /// replacement.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        state.cursor = 0;
        state.revealed = false;
    }

    /// Re-validate the cursor after the list shrank to `len` elements.
    /// Only a cursor that now points past the end is reset; otherwise the
    /// position (and reveal state) is kept.
    pub fn sync_after_removal(&self, len: usize) {
        let mut state = self.state.lock().unwrap();
        if state.cursor >= len {
            state.cursor = 0;
            state.revealed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_and_hides() {
        let nav = CardNavigator::new();

        // Full cycle over three cards returns to the start.
        for expected in [1, 2, 0] {
            nav.next(3);
            assert_eq!(nav.cursor(), expected);
            assert!(!nav.revealed());
        }
    }

    #[test]
    fn single_element_wraps_in_place() {
        let nav = CardNavigator::new();
        nav.toggle_reveal(1);
        nav.next(1);
        assert_eq!(nav.cursor(), 0);
        assert!(!nav.revealed());
    }

    #[test]
    fn empty_list_is_inert() {
        let nav = CardNavigator::new();
        nav.next(0);
        nav.toggle_reveal(0);
        assert_eq!(nav.cursor(), 0);
        assert!(!nav.revealed());
    }

    #[test]
    fn toggle_is_idempotent_under_double_application() {
        let nav = CardNavigator::new();
        nav.next(3);
        let cursor = nav.cursor();

        nav.toggle_reveal(3);
        assert!(nav.revealed());
        nav.toggle_reveal(3);
        assert!(!nav.revealed());
        assert_eq!(nav.cursor(), cursor);
    }

    #[test]
    fn removal_resets_only_when_cursor_is_past_the_end() {
        let nav = CardNavigator::new();
        nav.next(3);
        nav.next(3); // cursor = 2
        nav.toggle_reveal(3);

        // Shrink from 3 to 2: cursor 2 is now out of range.
        nav.sync_after_removal(2);
        assert_eq!(nav.cursor(), 0);
        assert!(!nav.revealed());

        // Shrink that keeps the cursor valid leaves it alone.
        let nav = CardNavigator::new();
        nav.next(3); // cursor = 1
        nav.sync_after_removal(2);
        assert_eq!(nav.cursor(), 1);
    }
}
