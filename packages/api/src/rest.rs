//! HTTP implementation of [`Backend`] against a Supabase-style service.
//!
//! Auth goes through the GoTrue endpoints under `/auth/v1/`, word rows
//! through the PostgREST endpoint `/rest/v1/words`. Every request carries
//! the public `apikey` header plus a bearer token — the session's access
//! token when signed in, the anon key otherwise.
//!
//! The current session is a process-wide handle: read by every row request,
//! mutated only by sign-in, sign-out, and session restoration. Successful
//! sign-in and sign-out broadcast the change through the [`AuthNotifier`].

use std::sync::{Arc, Mutex};

use reqwest::StatusCode;

use crate::client::Backend;
use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::events::{AuthNotifier, AuthSubscription};
use crate::models::{NewWord, Session, User, WordEntry};

const WORDS_TABLE: &str = "words";

/// Client for the hosted backend.
#[derive(Clone)]
pub struct RestBackend {
    config: BackendConfig,
    http: reqwest::Client,
    session: Arc<Mutex<Option<Session>>>,
    notifier: AuthNotifier,
}

impl RestBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            session: Arc::new(Mutex::new(None)),
            notifier: AuthNotifier::new(),
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.config.url.trim_end_matches('/'))
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.url.trim_end_matches('/'))
    }

    /// Bearer token for the next request: session token when signed in,
    /// anon key otherwise.
    fn bearer(&self) -> String {
        self.session
            .lock()
            .unwrap()
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_else(|| self.config.anon_key.clone())
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(self.bearer())
    }

    fn set_session(&self, session: Option<Session>) {
        *self.session.lock().unwrap() = session.clone();
        self.notifier.notify(session);
    }

    /// Map a non-success response onto the error taxonomy.
    async fn ensure_success(
        resp: reqwest::Response,
        context: &str,
    ) -> Result<reqwest::Response, BackendError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let detail = resp.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                BackendError::Auth(format!("{context}: {detail}"))
            }
            StatusCode::NOT_FOUND => BackendError::NotFound(format!("{context}: {detail}")),
            _ => BackendError::Network(format!("{context}: status {status}: {detail}")),
        })
    }
}

impl Backend for RestBackend {
    async fn get_session(&self) -> Result<Option<Session>, BackendError> {
        self.config.check()?;

        // Sessions are held in memory only; with no stored token there is
        // nothing to validate against the auth service.
        let Some(stored) = self.session.lock().unwrap().clone() else {
            return Ok(None);
        };

        let resp = self
            .request(reqwest::Method::GET, self.auth_url("user"))
            .send()
            .await?;

        if resp.status() == StatusCode::UNAUTHORIZED {
            // Token expired since we stored it; the session is gone.
            *self.session.lock().unwrap() = None;
            return Ok(None);
        }

        let resp = Self::ensure_success(resp, "get session").await?;
        let user: User = resp.json().await?;
        Ok(Some(Session {
            access_token: stored.access_token,
            user,
        }))
    }

    fn on_auth_state_change(&self) -> AuthSubscription {
        self.notifier.subscribe()
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<User, BackendError> {
        self.config.check()?;

        let resp = self
            .request(reqwest::Method::POST, self.auth_url("signup"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "sign up").await?;

        // With email confirmation enabled the service returns the bare user;
        // with autoconfirm it returns a session wrapping it.
        let body: serde_json::Value = resp.json().await?;
        let user_value = body.get("user").cloned().unwrap_or(body);
        serde_json::from_value(user_value)
            .map_err(|e| BackendError::Network(format!("malformed sign-up response: {e}")))
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, BackendError> {
        self.config.check()?;

        let resp = self
            .request(
                reqwest::Method::POST,
                format!("{}?grant_type=password", self.auth_url("token")),
            )
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "sign in").await?;

        let session: Session = resp.json().await?;
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        self.config.check()?;

        let resp = self
            .request(reqwest::Method::POST, self.auth_url("logout"))
            .send()
            .await?;
        Self::ensure_success(resp, "sign out").await?;

        self.set_session(None);
        Ok(())
    }

    async fn list_words(&self, owner: &str) -> Result<Vec<WordEntry>, BackendError> {
        self.config.check()?;

        let owner_filter = format!("eq.{owner}");
        let resp = self
            .request(reqwest::Method::GET, self.rest_url(WORDS_TABLE))
            .query(&[
                ("select", "*"),
                ("user_id", owner_filter.as_str()),
                ("order", "id.asc"),
            ])
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "list words").await?;

        Ok(resp.json().await?)
    }

    async fn insert_word(&self, record: &NewWord) -> Result<Vec<WordEntry>, BackendError> {
        self.config.check()?;

        let resp = self
            .request(reqwest::Method::POST, self.rest_url(WORDS_TABLE))
            .header("Prefer", "return=representation")
            .json(&vec![record])
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "insert word").await?;

        Ok(resp.json().await?)
    }

    async fn delete_word(&self, id: i64) -> Result<(), BackendError> {
        self.config.check()?;

        let id_filter = format!("eq.{id}");
        let resp = self
            .request(reqwest::Method::DELETE, self.rest_url(WORDS_TABLE))
            .query(&[("id", id_filter.as_str())])
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "delete word").await?;

        // The row endpoint answers 200 with an empty array when nothing
        // matched the filter.
        let deleted: Vec<serde_json::Value> = resp.json().await?;
        if deleted.is_empty() {
            return Err(BackendError::NotFound(format!("word row {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_backend_fails_uniformly() {
        let backend = RestBackend::new(BackendConfig::default());

        assert!(matches!(
            backend.get_session().await,
            Err(BackendError::Config(_))
        ));
        assert!(matches!(
            backend.sign_in_with_password("a@b.c", "pw").await,
            Err(BackendError::Config(_))
        ));
        assert!(matches!(
            backend.list_words("user-1").await,
            Err(BackendError::Config(_))
        ));
        assert!(matches!(
            backend.delete_word(1).await,
            Err(BackendError::Config(_))
        ));
    }
}
