//! The abstract backend contract.
//!
//! The core state machine is written against this trait so the same logic
//! runs against the hosted service ([`crate::RestBackend`]) and the
//! in-memory test double ([`crate::MemoryBackend`]).

use crate::error::BackendError;
use crate::events::AuthSubscription;
use crate::models::{NewWord, Session, User, WordEntry};

/// Async interface to the hosted auth service and `words` row store.
pub trait Backend {
    /// Query for an existing session (used at startup to restore identity).
    fn get_session(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<Session>, BackendError>>;

    /// Subscribe to auth-state changes. The subscription deregisters when
    /// dropped.
    fn on_auth_state_change(&self) -> AuthSubscription;

    /// Register new credentials. Registration does not sign the user in.
    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<User, BackendError>>;

    /// Verify credentials and open a session.
    fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<Session, BackendError>>;

    /// Close the current session.
    fn sign_out(&self) -> impl std::future::Future<Output = Result<(), BackendError>>;

    /// Fetch all word rows owned by `owner`, in stable insertion order.
    fn list_words(
        &self,
        owner: &str,
    ) -> impl std::future::Future<Output = Result<Vec<WordEntry>, BackendError>>;

    /// Insert a new row; the backend assigns the id and returns the created
    /// row(s).
    fn insert_word(
        &self,
        record: &NewWord,
    ) -> impl std::future::Future<Output = Result<Vec<WordEntry>, BackendError>>;

    /// Delete the row with the given id. `NotFound` when no row matched.
    fn delete_word(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<(), BackendError>>;
}
