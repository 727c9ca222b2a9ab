//! Wiring for a controller, navigation events and a host over the demo Safe

use std::sync::Arc;

use parking_lot::Mutex;
use safedeck::modal::{ModalController, ModalHost, ModalType, VisibleModal};
use safedeck::navigation::{NavigationEvents, Router};
use safedeck::wallet::Safe;

/// Shared collaborators for one modal session
pub struct TestFixture {
    pub controller: Arc<ModalController>,
    pub events: Arc<NavigationEvents>,
    pub safe: Arc<Safe>,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            controller: Arc::new(ModalController::new()),
            events: Arc::new(NavigationEvents::new()),
            safe: Arc::new(Safe::demo()),
        }
    }

    pub fn host(&self) -> ModalHost {
        ModalHost::new(
            Arc::clone(&self.controller),
            Arc::clone(&self.events),
            Arc::clone(&self.safe),
        )
    }

    pub fn router(&self) -> Router {
        Router::new(Arc::clone(&self.events))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Records every state a controller broadcasts
pub struct Recorder {
    seen: Arc<Mutex<Vec<Option<VisibleModal>>>>,
}

impl Recorder {
    pub fn attach(controller: &ModalController) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        controller.subscribe(move |state| sink.lock().push(state.cloned()));
        Self { seen }
    }

    pub fn types(&self) -> Vec<Option<ModalType>> {
        self.seen
            .lock()
            .iter()
            .map(|state| state.as_ref().map(VisibleModal::modal_type))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.seen.lock().len()
    }
}
