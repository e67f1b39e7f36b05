//! Auth-state-change notifications.
//!
//! Backends own an [`AuthNotifier`] and broadcast the new session (or `None`
//! on sign-out) after every auth transition. Consumers call
//! [`AuthNotifier::subscribe`] and hold the returned [`AuthSubscription`]
//! for as long as they want notifications; dropping it deregisters the
//! channel, so a subscription acquired at view mount is released on every
//! exit path.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;

use crate::models::Session;

/// Fan-out registry for auth-state changes.
#[derive(Clone, Default)]
pub struct AuthNotifier {
    inner: Arc<Mutex<NotifierInner>>,
}

#[derive(Default)]
struct NotifierInner {
    next_id: u64,
    senders: HashMap<u64, UnboundedSender<Option<Session>>>,
}

impl AuthNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener. The subscription stops receiving (and is
    /// removed from the registry) when dropped.
    pub fn subscribe(&self) -> AuthSubscription {
        let (tx, rx) = unbounded();
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.senders.insert(id, tx);
        AuthSubscription {
            id,
            rx,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `session` to every live subscriber, pruning closed channels.
    pub fn notify(&self, session: Option<Session>) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .senders
            .retain(|_, tx| tx.unbounded_send(session.clone()).is_ok());
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap().senders.len()
    }
}

/// Handle to an auth-state-change subscription. Dropping it unsubscribes.
pub struct AuthSubscription {
    id: u64,
    rx: UnboundedReceiver<Option<Session>>,
    registry: Weak<Mutex<NotifierInner>>,
}

impl AuthSubscription {
    /// Wait for the next auth-state change. Resolves to `None` once the
    /// backend side has gone away.
    pub async fn next_change(&mut self) -> Option<Option<Session>> {
        self.rx.next().await
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().unwrap().senders.remove(&self.id);
        }
    }
}
