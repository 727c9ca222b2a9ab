//! Application state
//!
//! `App` owns the router, the modal host and the per-page selection state.
//! It is built once per session; dropping it tears the modal host down and
//! removes its navigation registration.

mod event;
mod input;

pub use event::{Event, Handler};

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::modal::{
    ConfirmTxProps, ModalController, ModalHost, NewTxProps, RejectTxProps, ReplaceTxProps,
    SendTokensProps,
};
use crate::navigation::{NavigationEvents, Route, Router};
use crate::wallet::{QueuedTx, Safe, TokenBalance};

/// Focusable buttons of the relaying FAQ panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelayingButton {
    /// Go to the previous step.
    Back,
    /// Go to the next step.
    #[default]
    Next,
}

impl RelayingButton {
    /// The other button
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Back => Self::Next,
            Self::Next => Self::Back,
        }
    }
}

/// Cursor positions on the list pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected row on the balances page.
    pub balance: usize,
    /// Selected row on the transactions page.
    pub queued: usize,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// The Safe being managed
    pub safe: Arc<Safe>,

    /// Page routing
    pub router: Router,

    /// Modal controller and the flow it hosts
    pub modals: ModalHost,

    /// List cursors
    pub selection: Selection,

    /// Focused button on the relaying panel
    pub relaying_focus: RelayingButton,

    /// Last message reported by a completed flow
    pub status: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create the application for the Safe in `config`
    #[must_use]
    pub fn new(config: Config) -> Self {
        let safe = Arc::new(config.safe.clone());
        let events = Arc::new(NavigationEvents::new());
        let modals = ModalHost::new(
            Arc::new(ModalController::new()),
            Arc::clone(&events),
            Arc::clone(&safe),
        );
        info!(safe = %safe.address, chain = %safe.chain, "Application started");

        Self {
            config,
            safe,
            router: Router::new(events),
            modals,
            selection: Selection::default(),
            relaying_focus: RelayingButton::default(),
            status: None,
            should_quit: false,
        }
    }

    /// The page currently shown
    #[must_use]
    pub const fn route(&self) -> Route {
        self.router.current()
    }

    /// Navigate to `route`; a visible modal is dismissed once navigation completes
    pub fn navigate(&mut self, route: Route) {
        if self.router.push(route) {
            self.status = None;
        }
    }

    /// Return to the previous page
    pub fn go_back(&mut self) {
        if self.router.back() {
            self.status = None;
        }
    }

    /// Token under the cursor on the balances page
    #[must_use]
    pub fn selected_balance(&self) -> Option<&TokenBalance> {
        self.safe.balances.get(self.selection.balance)
    }

    /// Transaction under the cursor on the transactions page
    #[must_use]
    pub fn selected_queued(&self) -> Option<&QueuedTx> {
        self.safe.queue.get(self.selection.queued)
    }

    /// Open the new transaction menu
    pub fn open_new_tx(&self) {
        self.modals.open(NewTxProps);
    }

    /// Open a transfer of the selected token (or the first one)
    pub fn open_send_tokens(&self) {
        let balance = self
            .selected_balance()
            .or_else(|| self.safe.balances.first());
        if let Some(balance) = balance {
            self.modals
                .open(SendTokensProps::new(balance.symbol.clone(), 1));
        } else {
            debug!("No balances to send");
        }
    }

    /// Open the rejection flow for the selected queued transaction
    pub fn open_reject_tx(&self) {
        if let Some(tx) = self.selected_queued() {
            self.modals.open(RejectTxProps { nonce: tx.nonce });
        }
    }

    /// Open the replacement menu for the selected queued transaction
    pub fn open_replace_tx(&self) {
        if let Some(tx) = self.selected_queued() {
            self.modals.open(ReplaceTxProps { nonce: tx.nonce });
        }
    }

    /// Open the confirmation flow for the selected queued transaction
    pub fn open_confirm_tx(&self) {
        if let Some(tx) = self.selected_queued() {
            self.modals.open(ConfirmTxProps { tx: tx.clone() });
        }
    }

    fn move_selection(&mut self, down: bool) {
        let (cursor, len) = match self.route() {
            Route::Balances => (&mut self.selection.balance, self.safe.balances.len()),
            Route::Transactions => (&mut self.selection.queued, self.safe.queue.len()),
            Route::Home | Route::Relaying => return,
        };
        if down {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        } else {
            *cursor = cursor.saturating_sub(1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
