//! Word List Store: the ordered in-memory collection of a user's
//! word/meaning pairs.
//!
//! Every mutation is backend-confirmed before the local list changes, so
//! the user never sees state that does not exist remotely. On backend
//! failure the list stays at its last-known-good value; no optimistic
//! updates and no retries.

use std::sync::{Arc, Mutex};

use api::{Backend, NewWord, User, WordEntry};

/// Handle over the shared word list.
#[derive(Clone)]
pub struct WordListStore<B> {
    backend: Arc<B>,
    entries: Arc<Mutex<Vec<WordEntry>>>,
}

impl<B: Backend> WordListStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the current list, in backend insertion order.
    pub fn entries(&self) -> Vec<WordEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch all rows owned by `owner` and replace the list wholesale.
    /// On failure the stale list is kept.
    pub async fn load(&self, owner: &User) {
        match self.backend.list_words(&owner.id).await {
            Ok(words) => *self.entries.lock().unwrap() = words,
            Err(e) => tracing::error!(error = %e, "failed to fetch words"),
        }
    }

    /// Insert a new word for `owner` and append the confirmed row(s).
    /// Silently ignored when `word` or `meaning` is empty or no identity is
    /// set — malformed requests never reach the backend. Returns whether
    /// anything was appended so the view can clear its input fields.
    pub async fn add(&self, word: &str, meaning: &str, owner: Option<&User>) -> bool {
        let Some(owner) = owner else {
            return false;
        };
        if word.is_empty() || meaning.is_empty() {
            return false;
        }

        let record = NewWord {
            word: word.to_string(),
            meaning: meaning.to_string(),
            user_id: owner.id.clone(),
        };
        match self.backend.insert_word(&record).await {
            Ok(created) => {
                let appended = !created.is_empty();
                self.entries.lock().unwrap().extend(created);
                appended
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to add word");
                false
            }
        }
    }

    /// Delete the entry at `index` by its backend id. On success exactly
    /// that element is removed, preserving the order of the rest; on
    /// failure the entry stays to avoid diverging from the remote state.
    /// Returns whether an element was removed.
    pub async fn delete(&self, index: usize) -> bool {
        let Some(target) = self.entries.lock().unwrap().get(index).cloned() else {
            tracing::warn!(index, "delete index out of range");
            return false;
        };

        match self.backend.delete_word(target.id).await {
            Ok(()) => {
                let mut entries = self.entries.lock().unwrap();
                if let Some(pos) = entries.iter().position(|w| w.id == target.id) {
                    entries.remove(pos);
                }
                true
            }
            Err(e) => {
                tracing::error!(error = %e, id = target.id, "failed to delete word");
                false
            }
        }
    }

    /// Drop every entry; used on sign-out so no list outlives its owner.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
