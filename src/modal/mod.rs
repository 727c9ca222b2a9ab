//! Modal records and their payloads
//!
//! A modal is identified by a [`ModalType`] tag and carries a payload whose
//! shape depends on the tag. [`VisibleModal`] ties the two together so a
//! record with the wrong payload for its type cannot be constructed.

mod controller;
mod host;

pub use controller::{ModalController, SubscriptionId};
pub use host::{ModalHost, MountedFlow};

use serde::{Deserialize, Serialize};

use crate::wallet::QueuedTx;

/// The closed set of modal variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalType {
    /// Token transfer flow.
    SendTokens,
    /// Reject a queued transaction.
    RejectTx,
    /// Replace a queued transaction.
    ReplaceTx,
    /// Start a new transaction.
    NewTx,
    /// Confirm a proposed transaction.
    ConfirmTx,
}

impl ModalType {
    /// Every modal type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::SendTokens,
        Self::RejectTx,
        Self::ReplaceTx,
        Self::NewTx,
        Self::ConfirmTx,
    ];

    /// Stable identifier used in logs and serialized state.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SendTokens => "sendTokens",
            Self::RejectTx => "rejectTx",
            Self::ReplaceTx => "replaceTx",
            Self::NewTx => "newTx",
            Self::ConfirmTx => "confirmTx",
        }
    }
}

impl std::fmt::Display for ModalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Parameters for the token transfer flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTokensProps {
    /// Token ticker to send.
    pub token: String,
    /// Amount to send, in whole token units.
    pub amount: u64,
    /// Nonce to reuse when the transfer replaces a queued transaction.
    #[serde(default)]
    pub tx_nonce: Option<u64>,
}

impl SendTokensProps {
    /// Transfer at the next free nonce
    #[must_use]
    pub fn new(token: impl Into<String>, amount: u64) -> Self {
        Self {
            token: token.into(),
            amount,
            tx_nonce: None,
        }
    }
}

/// Parameters for the rejection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectTxProps {
    /// Nonce of the queued transaction to reject.
    pub nonce: u64,
}

/// Parameters for the replacement menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceTxProps {
    /// Nonce of the queued transaction to replace.
    pub nonce: u64,
}

/// The new transaction menu takes no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTxProps;

/// Parameters for the confirmation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmTxProps {
    /// The proposed transaction awaiting confirmation.
    pub tx: QueuedTx,
}

/// The record of the currently visible modal: a type tag plus its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "camelCase")]
pub enum VisibleModal {
    /// Token transfer flow.
    SendTokens(SendTokensProps),
    /// Reject a queued transaction.
    RejectTx(RejectTxProps),
    /// Replace a queued transaction.
    ReplaceTx(ReplaceTxProps),
    /// Start a new transaction.
    NewTx(NewTxProps),
    /// Confirm a proposed transaction.
    ConfirmTx(ConfirmTxProps),
}

impl VisibleModal {
    /// The tag of this record
    #[must_use]
    pub const fn modal_type(&self) -> ModalType {
        match self {
            Self::SendTokens(_) => ModalType::SendTokens,
            Self::RejectTx(_) => ModalType::RejectTx,
            Self::ReplaceTx(_) => ModalType::ReplaceTx,
            Self::NewTx(_) => ModalType::NewTx,
            Self::ConfirmTx(_) => ModalType::ConfirmTx,
        }
    }
}

impl From<SendTokensProps> for VisibleModal {
    fn from(props: SendTokensProps) -> Self {
        Self::SendTokens(props)
    }
}

impl From<RejectTxProps> for VisibleModal {
    fn from(props: RejectTxProps) -> Self {
        Self::RejectTx(props)
    }
}

impl From<ReplaceTxProps> for VisibleModal {
    fn from(props: ReplaceTxProps) -> Self {
        Self::ReplaceTx(props)
    }
}

impl From<NewTxProps> for VisibleModal {
    fn from(props: NewTxProps) -> Self {
        Self::NewTx(props)
    }
}

impl From<ConfirmTxProps> for VisibleModal {
    fn from(props: ConfirmTxProps) -> Self {
        Self::ConfirmTx(props)
    }
}
