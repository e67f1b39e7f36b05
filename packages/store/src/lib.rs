//! # Store crate — the trainer's core state machine
//!
//! Three independent units, each exposing state + operations, composed by
//! [`Trainer`]:
//!
//! | Unit | Owns |
//! |------|------|
//! | [`SessionController`] | Authentication state: `Unknown` until restoration completes, then `SignedOut` / `SignedIn(user)` |
//! | [`WordListStore`] | The ordered in-memory word list, every mutation confirmed by the backend before the local list changes |
//! | [`CardNavigator`] | The current-card cursor and the reveal flag for the meaning side |
//!
//! All units are handles over shared interior state (the same shape as the
//! backend clients in the `api` crate), so clones observe the same state and
//! async operations never hold a borrow across an await point.

pub mod navigator;
pub mod session;
pub mod trainer;
pub mod words;

pub use navigator::CardNavigator;
pub use session::{AuthState, SessionController};
pub use trainer::{Trainer, TrainerView};
pub use words::WordListStore;
