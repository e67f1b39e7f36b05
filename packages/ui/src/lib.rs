//! This crate contains all shared UI for the workspace.

mod provider;
pub use provider::{use_trainer, SharedTrainer, TrainerContext, TrainerProvider};

mod landing;
pub use landing::Landing;

mod auth_form;
pub use auth_form::AuthForm;

mod card;
pub use card::WordCard;

mod word_form;
pub use word_form::AddWordForm;
