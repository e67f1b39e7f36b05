//! Trainer context and hooks for the UI.
//!
//! [`TrainerProvider`] constructs the backend client from the environment,
//! shares a [`Trainer`] plus a render snapshot signal through context, and
//! runs the session lifecycle for the life of the view: restore on mount,
//! then follow auth-state-change notifications. The spawned task is tied to
//! the provider's scope, so unmounting cancels it and drops the
//! subscription, which deregisters it on every exit path.

use std::sync::Arc;

use dioxus::prelude::*;

use api::{BackendConfig, RestBackend};
use store::{Trainer, TrainerView};

/// The trainer as wired for the running application.
pub type SharedTrainer = Trainer<RestBackend>;

/// Shared handle: the trainer itself plus the snapshot the views render.
#[derive(Clone)]
pub struct TrainerContext {
    pub trainer: SharedTrainer,
    /// Snapshot of auth state, word list, cursor, and reveal flag.
    pub view: Signal<TrainerView>,
}

impl TrainerContext {
    /// Refresh the render snapshot after an operation completed.
    pub fn sync(&self) {
        let mut view = self.view;
        view.set(self.trainer.view());
    }
}

/// Get the trainer context provided by [`TrainerProvider`].
pub fn use_trainer() -> TrainerContext {
    use_context::<TrainerContext>()
}

/// Provider component that owns the trainer and its session lifecycle.
/// Wrap the app with this component.
#[component]
pub fn TrainerProvider(children: Element) -> Element {
    let trainer = use_hook(|| {
        let config = BackendConfig::from_env();
        if !config.is_configured() {
            tracing::warn!("backend not configured; set BACKEND_URL and BACKEND_ANON_KEY");
        }
        SharedTrainer::new(Arc::new(RestBackend::new(config)))
    });

    let view = use_signal({
        let trainer = trainer.clone();
        move || trainer.view()
    });

    let ctx = use_context_provider(|| TrainerContext { trainer, view });

    // Restore the session on mount, then pump auth-state changes until the
    // provider unmounts.
    let _ = use_future(move || {
        let ctx = ctx.clone();
        async move {
            let mut changes = ctx.trainer.session.subscribe();
            ctx.trainer.restore_session().await;
            ctx.sync();
            while let Some(change) = changes.next_change().await {
                ctx.trainer.apply_auth_change(change).await;
                ctx.sync();
            }
        }
    });

    rsx! {
        {children}
    }
}
