//! Backend error taxonomy.
//!
//! Every backend call resolves to one of these variants. Callers in the core
//! catch them at the call site, log with context, and keep their last-known
//! good state; nothing here propagates to the view layer.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// Bad credentials, expired session, or a request the service refused
    /// to authorize.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The referenced row does not exist on the backend.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backend could not be reached, or answered with something other
    /// than a well-formed success/auth/not-found response.
    #[error("network error: {0}")]
    Network(String),

    /// Missing or invalid connection parameters; every call fails this way
    /// until the endpoint and access key are supplied.
    #[error("backend not configured: {0}")]
    Config(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Network(err.to_string())
    }
}
