//! Publish/subscribe holder for the identity state
//!
//! The store owns the latest [`IdentityState`] snapshot. Publishers replace
//! the snapshot; subscribers are woken on every change and read the newest
//! value. Backed by a `tokio::sync::watch` channel, which needs no runtime
//! and therefore works the same in the browser and in native tests.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::identity::{IdentityState, User};

/// Shared, cloneable handle to the identity state
#[derive(Clone, Debug)]
pub struct IdentityStore {
    tx: Arc<watch::Sender<IdentityState>>,
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for IdentityStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tx, &other.tx)
    }
}

impl IdentityStore {
    /// Create a store in the unsettled state
    pub fn new() -> Self {
        Self::with_state(IdentityState::unsettled())
    }

    pub fn with_state(state: IdentityState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> IdentityState {
        self.tx.borrow().clone()
    }

    /// Replace the snapshot, notifying subscribers only if it changed.
    ///
    /// Returns whether the snapshot changed.
    pub fn publish(&self, state: IdentityState) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
        if changed {
            let current = self.tx.borrow();
            debug!(
                settled = current.settled,
                authenticated = current.user.is_some(),
                "Identity state updated"
            );
        }
        changed
    }

    /// Publish a settled state with the given session
    pub fn settle(&self, user: Option<User>) -> bool {
        self.publish(IdentityState {
            user,
            settled: true,
        })
    }

    /// Register a new subscriber
    pub fn subscribe(&self) -> IdentitySubscription {
        IdentitySubscription {
            rx: self.tx.subscribe(),
        }
    }
}

/// Receiving side of an [`IdentityStore`]
#[derive(Debug)]
pub struct IdentitySubscription {
    rx: watch::Receiver<IdentityState>,
}

impl IdentitySubscription {
    /// Latest snapshot, marking it as seen
    pub fn snapshot(&mut self) -> IdentityState {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for the next change.
    ///
    /// Returns `false` once every store handle has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
