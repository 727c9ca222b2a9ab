//! Per-flow transaction context
//!
//! Every time a modal is opened the host creates a fresh [`TxContext`] for
//! the flow to build its transaction in. The context is dropped when the
//! modal closes, so nothing a flow builds outlives its dialog.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::wallet::Safe;

/// Errors raised while building a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxBuildError {
    /// The Safe holds no balance of the token.
    #[error("unknown token {0}")]
    UnknownToken(String),
    /// A transfer of nothing.
    #[error("amount must be greater than zero")]
    ZeroAmount,
    /// The transfer exceeds the available balance.
    #[error("insufficient {token} balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Token ticker.
        token: String,
        /// Amount requested.
        requested: u64,
        /// Amount held by the Safe.
        available: u64,
    },
    /// The nonce has already been executed.
    #[error("nonce {nonce} is below the current Safe nonce {current}")]
    StaleNonce {
        /// Nonce requested.
        nonce: u64,
        /// Nonce of the next executable transaction.
        current: u64,
    },
}

/// A transaction ready to be proposed to the Safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeTransaction {
    /// Recipient address.
    pub to: String,
    /// Token being transferred.
    pub token: String,
    /// Amount, in whole token units.
    pub value: u64,
    /// Nonce the transaction executes at.
    pub nonce: u64,
}

impl SafeTransaction {
    /// Whether this is an on-chain rejection (a zero-value call to the Safe itself)
    #[must_use]
    pub fn is_rejection(&self, safe: &Safe) -> bool {
        self.value == 0 && self.to.eq_ignore_ascii_case(&safe.address)
    }
}

/// Scoped setup state for one modal session.
#[derive(Debug)]
pub struct TxContext {
    session: Uuid,
    safe: Arc<Safe>,
    safe_tx: Option<SafeTransaction>,
    error: Option<TxBuildError>,
    nonce: Option<u64>,
}

impl TxContext {
    /// Start a new session against `safe`
    #[must_use]
    pub fn new(safe: Arc<Safe>) -> Self {
        let session = Uuid::new_v4();
        debug!(%session, "Acquired transaction context");
        Self {
            session,
            safe,
            safe_tx: None,
            error: None,
            nonce: None,
        }
    }

    /// Identifier of this session
    #[must_use]
    pub const fn session(&self) -> Uuid {
        self.session
    }

    /// The Safe transactions are built for
    #[must_use]
    pub fn safe(&self) -> &Safe {
        &self.safe
    }

    /// The transaction built so far
    #[must_use]
    pub const fn safe_tx(&self) -> Option<&SafeTransaction> {
        self.safe_tx.as_ref()
    }

    /// The error from the last build attempt
    #[must_use]
    pub const fn error(&self) -> Option<&TxBuildError> {
        self.error.as_ref()
    }

    /// Nonce chosen for this session, falling back to the recommended one
    #[must_use]
    pub fn nonce(&self) -> u64 {
        self.nonce.unwrap_or_else(|| self.recommended_nonce())
    }

    /// Next free nonce after the queue
    #[must_use]
    pub fn recommended_nonce(&self) -> u64 {
        self.safe.recommended_nonce()
    }

    /// Pin the nonce used by subsequent builds
    pub const fn set_nonce(&mut self, nonce: u64) {
        self.nonce = Some(nonce);
    }

    /// Build a transfer of `amount` `token` to `to`.
    ///
    /// The result (or error) is also stored on the context.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is unknown, the amount is zero or
    /// exceeds the balance, or the nonce was already executed.
    pub fn build_transfer(
        &mut self,
        token: &str,
        amount: u64,
        to: &str,
    ) -> Result<&SafeTransaction, TxBuildError> {
        let result = self.check_transfer(token, amount).map(|symbol| SafeTransaction {
            to: to.to_string(),
            token: symbol,
            value: amount,
            nonce: self.nonce(),
        });
        self.store(result)
    }

    /// Build an on-chain rejection for `nonce`.
    ///
    /// # Errors
    ///
    /// Returns an error if the nonce was already executed.
    pub fn build_rejection(&mut self, nonce: u64) -> Result<&SafeTransaction, TxBuildError> {
        self.set_nonce(nonce);
        let result = self.check_nonce(nonce).map(|()| SafeTransaction {
            to: self.safe.address.clone(),
            token: self
                .safe
                .balances
                .first()
                .map_or_else(String::new, |balance| balance.symbol.clone()),
            value: 0,
            nonce,
        });
        self.store(result)
    }

    /// Adopt an already proposed transaction as the session's transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the nonce was already executed.
    pub fn load_existing(
        &mut self,
        tx: &crate::wallet::QueuedTx,
    ) -> Result<&SafeTransaction, TxBuildError> {
        self.set_nonce(tx.nonce);
        let result = self.check_nonce(tx.nonce).map(|()| SafeTransaction {
            to: tx.to.clone(),
            token: tx.token.clone(),
            value: tx.value,
            nonce: tx.nonce,
        });
        self.store(result)
    }

    fn check_transfer(&self, token: &str, amount: u64) -> Result<String, TxBuildError> {
        let balance = self
            .safe
            .balance(token)
            .ok_or_else(|| TxBuildError::UnknownToken(token.to_string()))?;
        if amount == 0 {
            return Err(TxBuildError::ZeroAmount);
        }
        if amount > balance.amount {
            return Err(TxBuildError::InsufficientBalance {
                token: balance.symbol.clone(),
                requested: amount,
                available: balance.amount,
            });
        }
        self.check_nonce(self.nonce())?;
        Ok(balance.symbol.clone())
    }

    fn check_nonce(&self, nonce: u64) -> Result<(), TxBuildError> {
        if nonce < self.safe.nonce {
            return Err(TxBuildError::StaleNonce {
                nonce,
                current: self.safe.nonce,
            });
        }
        Ok(())
    }

    fn store(
        &mut self,
        result: Result<SafeTransaction, TxBuildError>,
    ) -> Result<&SafeTransaction, TxBuildError> {
        match result {
            Ok(tx) => {
                self.error = None;
                let tx = self.safe_tx.insert(tx);
                Ok(&*tx)
            }
            Err(err) => {
                debug!(session = %self.session, error = %err, "Transaction build failed");
                self.safe_tx = None;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}

impl Drop for TxContext {
    fn drop(&mut self) {
        debug!(session = %self.session, "Released transaction context");
    }
}
