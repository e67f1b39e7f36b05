use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::client::Backend;
use crate::error::BackendError;
use crate::events::{AuthNotifier, AuthSubscription};
use crate::models::{NewWord, Session, User, WordEntry};

/// In-memory [`Backend`] for testing.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    /// email -> (password, user)
    users: Arc<Mutex<HashMap<String, (String, User)>>>,
    words: Arc<Mutex<Vec<WordEntry>>>,
    session: Arc<Mutex<Option<Session>>>,
    next_word_id: Arc<Mutex<i64>>,
    next_user_id: Arc<Mutex<i64>>,
    offline: Arc<Mutex<bool>>,
    insert_calls: Arc<Mutex<u32>>,
    notifier: AuthNotifier,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user without going through `sign_up`.
    pub fn with_user(self, email: &str, password: &str) -> Self {
        {
            let mut users = self.users.lock().unwrap();
            let id = {
                let mut next = self.next_user_id.lock().unwrap();
                *next += 1;
                *next
            };
            users.insert(
                email.to_string(),
                (
                    password.to_string(),
                    User {
                        id: format!("user-{id}"),
                        email: email.to_string(),
                    },
                ),
            );
        }
        self
    }

    /// When set, every call fails with a network error.
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    /// Number of insert requests that actually reached the backend.
    pub fn insert_calls(&self) -> u32 {
        *self.insert_calls.lock().unwrap()
    }

    /// Rows currently stored, regardless of owner.
    pub fn all_words(&self) -> Vec<WordEntry> {
        self.words.lock().unwrap().clone()
    }

    fn check_online(&self) -> Result<(), BackendError> {
        if *self.offline.lock().unwrap() {
            Err(BackendError::Network("backend unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Backend for MemoryBackend {
    async fn get_session(&self) -> Result<Option<Session>, BackendError> {
        self.check_online()?;
        Ok(self.session.lock().unwrap().clone())
    }

    fn on_auth_state_change(&self) -> AuthSubscription {
        self.notifier.subscribe()
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<User, BackendError> {
        self.check_online()?;
        let mut users = self.users.lock().unwrap();
        if users.contains_key(email) {
            return Err(BackendError::Auth(format!("{email} already registered")));
        }
        let id = {
            let mut next = self.next_user_id.lock().unwrap();
            *next += 1;
            *next
        };
        let user = User {
            id: format!("user-{id}"),
            email: email.to_string(),
        };
        users.insert(email.to_string(), (password.to_string(), user.clone()));
        Ok(user)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, BackendError> {
        self.check_online()?;
        let user = {
            let users = self.users.lock().unwrap();
            match users.get(email) {
                Some((stored, user)) if stored == password => user.clone(),
                _ => return Err(BackendError::Auth("invalid email or password".to_string())),
            }
        };
        let session = Session {
            access_token: format!("token-{}", user.id),
            user,
        };
        *self.session.lock().unwrap() = Some(session.clone());
        self.notifier.notify(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        self.check_online()?;
        *self.session.lock().unwrap() = None;
        self.notifier.notify(None);
        Ok(())
    }

    async fn list_words(&self, owner: &str) -> Result<Vec<WordEntry>, BackendError> {
        self.check_online()?;
        Ok(self
            .words
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.user_id == owner)
            .cloned()
            .collect())
    }

    async fn insert_word(&self, record: &NewWord) -> Result<Vec<WordEntry>, BackendError> {
        *self.insert_calls.lock().unwrap() += 1;
        self.check_online()?;
        let id = {
            let mut next = self.next_word_id.lock().unwrap();
            *next += 1;
            *next
        };
        let entry = WordEntry {
            id,
            word: record.word.clone(),
            meaning: record.meaning.clone(),
            user_id: record.user_id.clone(),
        };
        self.words.lock().unwrap().push(entry.clone());
        Ok(vec![entry])
    }

    async fn delete_word(&self, id: i64) -> Result<(), BackendError> {
        self.check_online()?;
        let mut words = self.words.lock().unwrap();
        match words.iter().position(|w| w.id == id) {
            Some(pos) => {
                words.remove(pos);
                Ok(())
            }
            None => Err(BackendError::NotFound(format!("word row {id}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_up_then_sign_in() {
        let backend = MemoryBackend::new();

        let user = backend.sign_up("a@example.com", "pw").await.unwrap();
        assert_eq!(user.email, "a@example.com");

        // Registration alone opens no session.
        assert!(backend.get_session().await.unwrap().is_none());

        let session = backend
            .sign_in_with_password("a@example.com", "pw")
            .await
            .unwrap();
        assert_eq!(session.user, user);
        assert_eq!(backend.get_session().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn sign_in_rejects_bad_password() {
        let backend = MemoryBackend::new().with_user("a@example.com", "pw");
        let err = backend
            .sign_in_with_password("a@example.com", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Auth(_)));
    }

    #[tokio::test]
    async fn words_are_scoped_to_owner() {
        let backend = MemoryBackend::new();
        backend
            .insert_word(&NewWord {
                word: "apple".into(),
                meaning: "りんご".into(),
                user_id: "user-1".into(),
            })
            .await
            .unwrap();
        backend
            .insert_word(&NewWord {
                word: "dog".into(),
                meaning: "犬".into(),
                user_id: "user-2".into(),
            })
            .await
            .unwrap();

        let mine = backend.list_words("user-1").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].word, "apple");
    }

    #[tokio::test]
    async fn delete_missing_row_is_not_found() {
        let backend = MemoryBackend::new();
        let err = backend.delete_word(42).await.unwrap_err();
        assert!(matches!(err, BackendError::NotFound(_)));
    }

    #[tokio::test]
    async fn auth_changes_are_broadcast() {
        let backend = MemoryBackend::new().with_user("a@example.com", "pw");
        let mut sub = backend.on_auth_state_change();

        let session = backend
            .sign_in_with_password("a@example.com", "pw")
            .await
            .unwrap();
        backend.sign_out().await.unwrap();

        assert_eq!(sub.next_change().await, Some(Some(session)));
        assert_eq!(sub.next_change().await, Some(None));
    }

    #[tokio::test]
    async fn offline_backend_fails_with_network_error() {
        let backend = MemoryBackend::new();
        backend.set_offline(true);
        assert!(matches!(
            backend.list_words("user-1").await,
            Err(BackendError::Network(_))
        ));
    }
}
