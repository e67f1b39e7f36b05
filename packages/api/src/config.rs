//! Connection parameters for the hosted backend.
//!
//! Two values configure the whole client: the service endpoint and the
//! public access key sent as `apikey` with every request. They come from the
//! `BACKEND_URL` / `BACKEND_ANON_KEY` environment — read at runtime on
//! native targets, and baked in at compile time (`option_env!`) for wasm
//! builds where no process environment exists.
//!
//! A missing or empty value does not prevent constructing the client; it
//! makes every backend call fail uniformly with [`BackendError::Config`].

use crate::error::BackendError;

/// Endpoint + access key for the hosted auth/row service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackendConfig {
    /// Base URL of the service, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    /// Public (anon) API key.
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Read the configuration from the environment, preferring the runtime
    /// environment and falling back to values captured at compile time.
    pub fn from_env() -> Self {
        let url = std::env::var("BACKEND_URL")
            .ok()
            .or_else(|| option_env!("BACKEND_URL").map(String::from))
            .unwrap_or_default();
        let anon_key = std::env::var("BACKEND_ANON_KEY")
            .ok()
            .or_else(|| option_env!("BACKEND_ANON_KEY").map(String::from))
            .unwrap_or_default();
        Self { url, anon_key }
    }

    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }

    /// Guard used at the top of every backend call.
    pub(crate) fn check(&self) -> Result<(), BackendError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(BackendError::Config(
                "BACKEND_URL and BACKEND_ANON_KEY must be set".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_check_fails() {
        let config = BackendConfig::default();
        assert!(!config.is_configured());
        assert!(matches!(config.check(), Err(BackendError::Config(_))));
    }

    #[test]
    fn configured_check_passes() {
        let config = BackendConfig::new("https://example.test", "anon-key");
        assert!(config.is_configured());
        assert!(config.check().is_ok());
    }
}
