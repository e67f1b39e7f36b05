//! # API crate — client for the hosted backend
//!
//! Everything the trainer needs from the outside world goes through this crate:
//! credential auth (sign-up, password sign-in, sign-out, session restoration)
//! and the `words` row store, both served by a hosted Supabase-style service
//! reachable over HTTPS.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`Backend`] trait — the abstract contract the core state machine is written against |
//! | [`rest`] | [`RestBackend`], the HTTP implementation (GoTrue auth endpoints + PostgREST rows) |
//! | [`memory`] | [`MemoryBackend`], an in-memory implementation for tests |
//! | [`events`] | Auth-state-change notifications: [`AuthNotifier`] fan-out and the [`AuthSubscription`] guard that deregisters on drop |
//! | [`config`] | [`BackendConfig`] — service endpoint + access key from the environment |
//! | [`error`] | [`BackendError`] taxonomy (auth / not-found / network / config) |
//! | [`models`] | Wire models: [`User`], [`Session`], [`WordEntry`], [`NewWord`] |
//!
//! The [`Backend`] trait exists so the core can be exercised against
//! [`MemoryBackend`] in tests while the application runs against
//! [`RestBackend`]; both share the same auth-notification behavior.

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod rest;

mod memory;
pub use memory::MemoryBackend;

pub use client::Backend;
pub use config::BackendConfig;
pub use error::BackendError;
pub use events::{AuthNotifier, AuthSubscription};
pub use models::{NewWord, Session, User, WordEntry};
pub use rest::RestBackend;
