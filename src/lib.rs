//! safedeck - Terminal UI for multisig wallets
//!
//! safedeck shows a Safe's balances and transaction queue and drives the
//! transaction flows (send, reject, replace, confirm) through a single modal
//! slot. Opening a modal replaces whatever was open; finishing a page
//! navigation dismisses it.

pub mod app;
pub mod config;
pub mod flows;
pub mod modal;
pub mod navigation;
pub mod paths;
pub mod tui;
pub mod tx;
pub mod wallet;

pub use app::App;
pub use config::Config;
pub use modal::{ModalController, ModalHost, ModalType, VisibleModal};
