//! Session Controller: owns authentication state and delegates every
//! credential operation to the backend.
//!
//! Failure policy throughout: log the error with context and keep the
//! last-known state. Nothing here surfaces an error to the view layer.

use std::sync::{Arc, Mutex};

use api::{AuthSubscription, Backend, Session, User};

/// Authentication lifecycle state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthState {
    /// Startup: session restoration has not completed yet.
    #[default]
    Unknown,
    SignedOut,
    SignedIn(User),
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::SignedIn(user) => Some(user),
            _ => None,
        }
    }
}

/// Handle over the shared authentication state.
#[derive(Clone)]
pub struct SessionController<B> {
    backend: Arc<B>,
    state: Arc<Mutex<AuthState>>,
}

impl<B: Backend> SessionController<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(AuthState::Unknown)),
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.lock().unwrap().clone()
    }

    /// Current identity, if signed in.
    pub fn user(&self) -> Option<User> {
        self.state().user().cloned()
    }

    /// Register for auth-state-change notifications for the lifetime of the
    /// returned subscription.
    pub fn subscribe(&self) -> AuthSubscription {
        self.backend.on_auth_state_change()
    }

    /// Query the backend for an existing session at startup. Returns the
    /// restored user so the caller can trigger a word-list load.
    pub async fn restore(&self) -> Option<User> {
        match self.backend.get_session().await {
            Ok(Some(session)) => {
                let user = session.user;
                *self.state.lock().unwrap() = AuthState::SignedIn(user.clone());
                Some(user)
            }
            Ok(None) => {
                *self.state.lock().unwrap() = AuthState::SignedOut;
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to restore session");
                *self.state.lock().unwrap() = AuthState::SignedOut;
                None
            }
        }
    }

    /// Register new credentials. Registration and login are distinct
    /// operations; a successful sign-up changes no local state.
    pub async fn sign_up(&self, email: &str, password: &str) {
        match self.backend.sign_up(email, password).await {
            Ok(user) => tracing::info!(email = %user.email, "user registered"),
            Err(e) => tracing::error!(error = %e, "sign-up failed"),
        }
    }

    /// Verify credentials. Returns the signed-in user so the caller can
    /// trigger a word-list load; on failure state is left unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Option<User> {
        match self.backend.sign_in_with_password(email, password).await {
            Ok(session) => {
                let user = session.user;
                *self.state.lock().unwrap() = AuthState::SignedIn(user.clone());
                Some(user)
            }
            Err(e) => {
                tracing::error!(error = %e, "login failed");
                None
            }
        }
    }

    /// Close the session. Returns whether sign-out succeeded so the caller
    /// can clear the word list; on failure state is left unchanged.
    pub async fn logout(&self) -> bool {
        match self.backend.sign_out().await {
            Ok(()) => {
                *self.state.lock().unwrap() = AuthState::SignedOut;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "logout failed");
                false
            }
        }
    }

    /// Replace the identity with an auth-state-change notification's
    /// session. Last writer wins between this and explicit login/restore.
    /// Returns the user when one is present so the caller reloads the list.
    pub fn apply_auth_change(&self, session: Option<Session>) -> Option<User> {
        match session {
            Some(session) => {
                let user = session.user;
                *self.state.lock().unwrap() = AuthState::SignedIn(user.clone());
                Some(user)
            }
            None => {
                *self.state.lock().unwrap() = AuthState::SignedOut;
                None
            }
        }
    }
}
