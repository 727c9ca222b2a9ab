//! Single-slot modal store
//!
//! The controller owns at most one [`VisibleModal`]. Opening a modal replaces
//! whatever was visible; there is no stack. Listeners are notified after every
//! change, outside the store lock, so a listener may read or change the store
//! again. A change made during a notification supersedes the one being
//! delivered: the remaining listeners only see the newer state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::debug;

use super::VisibleModal;

type Listener = Arc<dyn Fn(Option<&VisibleModal>) + Send + Sync>;

/// Handle returned by [`ModalController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Source of truth for which modal, if any, is open.
pub struct ModalController {
    visible: Mutex<Option<VisibleModal>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
    // Bumped under the `visible` lock on every change.
    generation: AtomicU64,
}

impl std::fmt::Debug for ModalController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalController")
            .field("visible", &*self.visible.lock())
            .field("listeners", &self.listeners.lock().len())
            .field("generation", &self.generation.load(Ordering::Acquire))
            .finish()
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalController {
    /// Create an empty controller
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible: Mutex::new(None),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
            generation: AtomicU64::new(0),
        }
    }

    /// Show `modal`, replacing any modal currently visible.
    pub fn open(&self, modal: impl Into<VisibleModal>) {
        let modal = modal.into();
        debug!(modal = %modal.modal_type(), "Opening modal");
        let generation = {
            let mut visible = self.visible.lock();
            if let Some(previous) = visible.as_ref() {
                debug!(modal = %previous.modal_type(), "Replacing visible modal");
            }
            *visible = Some(modal.clone());
            self.generation.fetch_add(1, Ordering::AcqRel) + 1
        };
        self.notify(generation, Some(&modal));
    }

    /// Dismiss the visible modal. Does nothing if no modal is open.
    pub fn close(&self) {
        let (previous, generation) = {
            let mut visible = self.visible.lock();
            let Some(previous) = visible.take() else {
                return;
            };
            (previous, self.generation.fetch_add(1, Ordering::AcqRel) + 1)
        };
        debug!(modal = %previous.modal_type(), "Closing modal");
        self.notify(generation, None);
    }

    /// Snapshot of the visible modal
    #[must_use]
    pub fn current(&self) -> Option<VisibleModal> {
        self.visible.lock().clone()
    }

    /// Whether any modal is visible
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visible.lock().is_some()
    }

    /// Handler for the host's navigation-completed signal.
    ///
    /// Flows belong to the page they were opened from, so a completed
    /// navigation dismisses whatever is visible.
    pub fn on_navigation_complete(&self) {
        if self.is_open() {
            debug!("Navigation completed, dismissing modal");
        }
        self.close();
    }

    /// Register a listener called with the new state after every change
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(Option<&VisibleModal>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Number of registered listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn notify(&self, generation: u64, state: Option<&VisibleModal>) {
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            if self.generation.load(Ordering::Acquire) != generation {
                debug!(generation, "Dropping stale modal notification");
                return;
            }
            listener(state);
        }
    }
}
