//! Modal host
//!
//! The host is created once per application session. It mounts the flow for
//! the visible modal together with a fresh [`TxContext`], and drops both as
//! soon as the modal closes. It also wires the controller to the navigation
//! events so that completing a page change dismisses the dialog.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use ratatui::crossterm::event::KeyCode;
use ratatui::text::Line;
use tracing::debug;
use uuid::Uuid;

use super::{ModalController, SubscriptionId, VisibleModal};
use crate::flows::{self, FlowDescriptor, FlowOutcome, FlowState};
use crate::navigation::{ListenerId, NavigationEvents, RouteEventKind};
use crate::tx::TxContext;
use crate::wallet::Safe;

/// A modal session: the record, its transaction context and its flow.
#[derive(Debug)]
pub struct MountedFlow {
    modal: VisibleModal,
    context: TxContext,
    flow: FlowState,
}

impl MountedFlow {
    fn mount(modal: VisibleModal, safe: Arc<Safe>) -> Self {
        let mut context = TxContext::new(safe);
        let flow = FlowState::mount(&modal, &mut context);
        debug!(modal = %modal.modal_type(), session = %context.session(), "Mounted flow");
        Self {
            modal,
            context,
            flow,
        }
    }

    /// The record this session was opened with
    #[must_use]
    pub const fn modal(&self) -> &VisibleModal {
        &self.modal
    }

    /// The mounted flow
    #[must_use]
    pub const fn flow(&self) -> &FlowState {
        &self.flow
    }

    /// Presentation data for the dialog shell
    #[must_use]
    pub const fn descriptor(&self) -> FlowDescriptor {
        flows::descriptor(self.modal.modal_type())
    }

    /// Dialog content
    #[must_use]
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.flow.lines(&self.context)
    }
}

#[derive(Debug)]
struct Slot {
    safe: Arc<Safe>,
    mounted: Option<MountedFlow>,
}

impl Slot {
    fn apply(&mut self, state: Option<&VisibleModal>) {
        // The previous session is released before the next one is built.
        self.mounted = None;
        if let Some(modal) = state {
            self.mounted = Some(MountedFlow::mount(modal.clone(), Arc::clone(&self.safe)));
        }
    }
}

/// Hosts the flow for the visible modal and ties it to navigation.
#[derive(Debug)]
pub struct ModalHost {
    controller: Arc<ModalController>,
    events: Arc<NavigationEvents>,
    slot: Arc<Mutex<Slot>>,
    subscription: SubscriptionId,
    navigation: ListenerId,
}

impl ModalHost {
    /// Attach to `controller` and register for navigation events.
    ///
    /// Registrations are removed again when the host is dropped.
    #[must_use]
    pub fn new(
        controller: Arc<ModalController>,
        events: Arc<NavigationEvents>,
        safe: Arc<Safe>,
    ) -> Self {
        let slot = Arc::new(Mutex::new(Slot {
            safe,
            mounted: None,
        }));
        slot.lock().apply(controller.current().as_ref());

        let sink = Arc::clone(&slot);
        let subscription = controller.subscribe(move |state| sink.lock().apply(state));

        let store: Weak<ModalController> = Arc::downgrade(&controller);
        let navigation = events.on(RouteEventKind::ChangeComplete, move |_| {
            if let Some(store) = store.upgrade() {
                store.on_navigation_complete();
            }
        });
        debug!("Modal host attached");

        Self {
            controller,
            events,
            slot,
            subscription,
            navigation,
        }
    }

    /// Show `modal`, replacing any visible modal
    pub fn open(&self, modal: impl Into<VisibleModal>) {
        self.controller.open(modal);
    }

    /// Dismiss the visible modal
    pub fn close(&self) {
        self.controller.close();
    }

    /// Snapshot of the visible record
    #[must_use]
    pub fn current(&self) -> Option<VisibleModal> {
        self.controller.current()
    }

    /// Whether a flow is mounted (the dialog is in its open state)
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.slot.lock().mounted.is_some()
    }

    /// Session id of the mounted flow's transaction context
    #[must_use]
    pub fn session(&self) -> Option<Uuid> {
        self.slot
            .lock()
            .mounted
            .as_ref()
            .map(|mounted| mounted.context.session())
    }

    /// Run `f` against the mounted flow, if any.
    ///
    /// `f` must not call back into the controller.
    pub fn with_mounted<R>(&self, f: impl FnOnce(&MountedFlow) -> R) -> Option<R> {
        self.slot.lock().mounted.as_ref().map(f)
    }

    /// Forward a key press to the mounted flow and apply its outcome
    pub fn handle_key(&self, code: KeyCode) -> FlowOutcome {
        let outcome = {
            let mut slot = self.slot.lock();
            let Some(MountedFlow { flow, context, .. }) = slot.mounted.as_mut() else {
                return FlowOutcome::Continue;
            };
            flow.handle_key(code, context)
        };

        match &outcome {
            FlowOutcome::Continue => {}
            FlowOutcome::Close | FlowOutcome::Complete(_) => self.controller.close(),
            FlowOutcome::Open(modal) => self.controller.open(modal.clone()),
        }
        outcome
    }
}

impl Drop for ModalHost {
    fn drop(&mut self) {
        self.controller.unsubscribe(self.subscription);
        self.events.off(self.navigation);
        self.slot.lock().mounted = None;
        debug!("Modal host detached");
    }
}
