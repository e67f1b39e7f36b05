//! Trainer: thin composition of the three core units.
//!
//! Owns no state of its own — it wires the cross-unit triggers: a sign-in
//! from any path (restore, login, auth notification) loads that user's
//! words and rewinds the navigator; a sign-out clears the list so no words
//! outlive their owner; a deletion re-validates the cursor. Identity is
//! threaded explicitly from the Session Controller into every word-list
//! mutation, never re-derived inside one.

use std::sync::Arc;

use api::{Backend, Session, User, WordEntry};

use crate::navigator::CardNavigator;
use crate::session::{AuthState, SessionController};
use crate::words::WordListStore;

/// The composed trainer. Cloning yields another handle to the same state.
#[derive(Clone)]
pub struct Trainer<B> {
    pub session: SessionController<B>,
    pub words: WordListStore<B>,
    pub cards: CardNavigator,
}

/// Immutable snapshot of everything the view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerView {
    pub auth: AuthState,
    pub words: Vec<WordEntry>,
    pub cursor: usize,
    pub revealed: bool,
}

impl<B: Backend> Trainer<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            session: SessionController::new(backend.clone()),
            words: WordListStore::new(backend),
            cards: CardNavigator::new(),
        }
    }

    pub fn view(&self) -> TrainerView {
        TrainerView {
            auth: self.session.state(),
            words: self.words.entries(),
            cursor: self.cards.cursor(),
            revealed: self.cards.revealed(),
        }
    }

    async fn reload(&self, user: &User) {
        self.words.load(user).await;
        self.cards.reset();
    }

    /// Restore an existing session at startup; a restored identity loads
    /// its word list.
    pub async fn restore_session(&self) {
        if let Some(user) = self.session.restore().await {
            self.reload(&user).await;
        }
    }

    pub async fn sign_up(&self, email: &str, password: &str) {
        self.session.sign_up(email, password).await;
    }

    /// Log in; success loads the word list automatically.
    pub async fn login(&self, email: &str, password: &str) {
        if let Some(user) = self.session.login(email, password).await {
            self.reload(&user).await;
        }
    }

    /// Log out; success empties the word list and rewinds the navigator.
    pub async fn logout(&self) {
        if self.session.logout().await {
            self.words.clear();
            self.cards.reset();
        }
    }

    /// React to an external auth-state-change notification.
    pub async fn apply_auth_change(&self, session: Option<Session>) {
        match self.session.apply_auth_change(session) {
            Some(user) => self.reload(&user).await,
            None => {
                self.words.clear();
                self.cards.reset();
            }
        }
    }

    /// Add a word for the current identity. Returns whether an entry was
    /// appended so the view can clear its input fields.
    pub async fn add_word(&self, word: &str, meaning: &str) -> bool {
        let owner = self.session.user();
        self.words.add(word, meaning, owner.as_ref()).await
    }

    /// Delete the entry at `index`, then re-validate the cursor against the
    /// shrunk list.
    pub async fn delete_word(&self, index: usize) {
        if self.words.delete(index).await {
            self.cards.sync_after_removal(self.words.len());
        }
    }

    /// Delete the card currently shown.
    pub async fn delete_current(&self) {
        self.delete_word(self.cards.cursor()).await;
    }

    pub fn next_card(&self) {
        self.cards.next(self.words.len());
    }

    pub fn toggle_reveal(&self) {
        self.cards.toggle_reveal(self.words.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MemoryBackend;

    async fn signed_in_trainer(words: &[(&str, &str)]) -> Trainer<MemoryBackend> {
        let backend = Arc::new(MemoryBackend::new().with_user("a@example.com", "pw"));
        let trainer = Trainer::new(backend);
        trainer.login("a@example.com", "pw").await;
        for (word, meaning) in words {
            trainer.add_word(word, meaning).await;
        }
        trainer
    }

    #[tokio::test]
    async fn login_triggers_word_list_load() {
        let backend = Arc::new(MemoryBackend::new().with_user("a@example.com", "pw"));
        // Seed a row for the user before they log in on this client.
        let user = backend
            .sign_in_with_password("a@example.com", "pw")
            .await
            .unwrap()
            .user;
        backend
            .insert_word(&api::NewWord {
                word: "apple".into(),
                meaning: "りんご".into(),
                user_id: user.id,
            })
            .await
            .unwrap();
        backend.sign_out().await.unwrap();

        let trainer = Trainer::new(backend);
        assert_eq!(trainer.view().auth, AuthState::Unknown);

        trainer.login("a@example.com", "pw").await;

        let view = trainer.view();
        assert!(matches!(view.auth, AuthState::SignedIn(_)));
        assert_eq!(view.words.len(), 1);
        assert_eq!(view.cursor, 0);
        assert!(!view.revealed);
    }

    #[tokio::test]
    async fn full_cycle_returns_cursor_to_start() {
        let trainer = signed_in_trainer(&[("a", "1"), ("b", "2"), ("c", "3")]).await;
        let start = trainer.cards.cursor();

        for _ in 0..3 {
            trainer.next_card();
        }

        assert_eq!(trainer.cards.cursor(), start);
        assert!(!trainer.cards.revealed());
    }

    #[tokio::test]
    async fn single_card_wraps_in_place() {
        let trainer = signed_in_trainer(&[("apple", "りんご")]).await;
        trainer.next_card();
        assert_eq!(trainer.cards.cursor(), 0);
        assert!(!trainer.cards.revealed());
    }

    #[tokio::test]
    async fn deleting_past_the_cursor_resets_it() {
        let trainer = signed_in_trainer(&[("a", "1"), ("b", "2"), ("c", "3")]).await;
        trainer.next_card();
        trainer.next_card(); // cursor = 2

        trainer.delete_word(2).await;

        let view = trainer.view();
        assert_eq!(view.words.len(), 2);
        assert_eq!(view.words[0].word, "a");
        assert_eq!(view.words[1].word, "b");
        assert_eq!(view.cursor, 0);
        assert!(!view.revealed);
    }

    #[tokio::test]
    async fn deleting_the_last_entry_leaves_everything_reset() {
        let trainer = signed_in_trainer(&[("a", "1")]).await;
        trainer.toggle_reveal();

        trainer.delete_current().await;

        let view = trainer.view();
        assert!(view.words.is_empty());
        assert_eq!(view.cursor, 0);
        assert!(!view.revealed);
    }

    #[tokio::test]
    async fn logout_clears_words_and_identity() {
        let trainer = signed_in_trainer(&[("a", "1"), ("b", "2")]).await;
        trainer.next_card();

        trainer.logout().await;

        let view = trainer.view();
        assert_eq!(view.auth, AuthState::SignedOut);
        assert!(view.words.is_empty());
        assert_eq!(view.cursor, 0);
    }

    #[tokio::test]
    async fn restore_session_loads_words() {
        let backend = Arc::new(MemoryBackend::new().with_user("a@example.com", "pw"));
        {
            // Another handle signs in and adds a word; the session stays open.
            let other = Trainer::new(backend.clone());
            other.login("a@example.com", "pw").await;
            other.add_word("apple", "りんご").await;
        }

        let trainer = Trainer::new(backend);
        trainer.restore_session().await;

        let view = trainer.view();
        assert!(matches!(view.auth, AuthState::SignedIn(_)));
        assert_eq!(view.words.len(), 1);
    }

    #[tokio::test]
    async fn auth_change_notifications_drive_state() {
        let backend = Arc::new(MemoryBackend::new().with_user("a@example.com", "pw"));
        let trainer = Trainer::new(backend.clone());
        let mut sub = trainer.session.subscribe();

        // Sign-in happens elsewhere (e.g. another view); the notification
        // carries the session.
        let session = backend
            .sign_in_with_password("a@example.com", "pw")
            .await
            .unwrap();
        backend
            .insert_word(&api::NewWord {
                word: "apple".into(),
                meaning: "りんご".into(),
                user_id: session.user.id.clone(),
            })
            .await
            .unwrap();

        let change = sub.next_change().await.unwrap();
        trainer.apply_auth_change(change).await;
        assert!(matches!(trainer.view().auth, AuthState::SignedIn(_)));
        assert_eq!(trainer.view().words.len(), 1);

        backend.sign_out().await.unwrap();
        let change = sub.next_change().await.unwrap();
        trainer.apply_auth_change(change).await;

        let view = trainer.view();
        assert_eq!(view.auth, AuthState::SignedOut);
        assert!(view.words.is_empty());
    }

    #[tokio::test]
    async fn empty_inputs_never_reach_the_backend() {
        let backend = Arc::new(MemoryBackend::new().with_user("a@example.com", "pw"));
        let trainer = Trainer::new(backend.clone());
        trainer.login("a@example.com", "pw").await;

        assert!(!trainer.add_word("", "meaning").await);
        assert!(!trainer.add_word("word", "").await);

        assert_eq!(trainer.view().words.len(), 0);
        assert_eq!(backend.insert_calls(), 0);
    }
}
