//! Wallet domain data
//!
//! A `Safe` is a multisig account: a set of owners, a confirmation threshold,
//! token balances and a queue of proposed transactions waiting for
//! signatures. The data here is read-only; it is loaded from configuration
//! and shared with transaction flows through an `Arc`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Balance of a single token held by the Safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    /// Token ticker (for example, `ETH`).
    pub symbol: String,
    /// Amount held, in whole token units.
    pub amount: u64,
}

impl TokenBalance {
    /// Create a balance entry
    #[must_use]
    pub fn new(symbol: impl Into<String>, amount: u64) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
        }
    }
}

/// A transaction that has been proposed but not yet executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedTx {
    /// Safe nonce this transaction will execute at.
    pub nonce: u64,
    /// Recipient address.
    pub to: String,
    /// Token being transferred.
    pub token: String,
    /// Amount being transferred, in whole token units.
    pub value: u64,
    /// Number of owner confirmations collected so far.
    pub confirmations: u32,
    /// When the transaction was proposed.
    pub submitted_at: DateTime<Utc>,
}

impl QueuedTx {
    /// Short, human-readable age such as `5m ago`.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.submitted_at);
        if elapsed < Duration::minutes(1) {
            "just now".to_string()
        } else if elapsed < Duration::hours(1) {
            format!("{}m ago", elapsed.num_minutes())
        } else if elapsed < Duration::days(1) {
            format!("{}h ago", elapsed.num_hours())
        } else {
            format!("{}d ago", elapsed.num_days())
        }
    }
}

/// A multisig account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Safe {
    /// Checksummed account address.
    pub address: String,
    /// Name of the chain the Safe is deployed on.
    pub chain: String,
    /// Number of confirmations required to execute a transaction.
    pub threshold: u32,
    /// Owner addresses.
    pub owners: Vec<String>,
    /// Nonce of the next transaction to execute.
    pub nonce: u64,
    /// Token balances.
    #[serde(default)]
    pub balances: Vec<TokenBalance>,
    /// Proposed transactions, ordered by nonce.
    #[serde(default)]
    pub queue: Vec<QueuedTx>,
}

impl Safe {
    /// Look up the balance of a token by symbol (case-insensitive)
    #[must_use]
    pub fn balance(&self, symbol: &str) -> Option<&TokenBalance> {
        self.balances
            .iter()
            .find(|balance| balance.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Look up a queued transaction by nonce
    #[must_use]
    pub fn queued(&self, nonce: u64) -> Option<&QueuedTx> {
        self.queue.iter().find(|tx| tx.nonce == nonce)
    }

    /// Nonce a newly proposed transaction should use.
    ///
    /// Queued transactions occupy consecutive nonces starting at the Safe
    /// nonce, so the next free one is past the highest queued nonce.
    #[must_use]
    pub fn recommended_nonce(&self) -> u64 {
        self.queue
            .iter()
            .map(|tx| tx.nonce.saturating_add(1))
            .max()
            .unwrap_or(self.nonce)
            .max(self.nonce)
    }

    /// Shortened address for display (`0x1234…abcd`)
    #[must_use]
    pub fn short_address(&self) -> String {
        short_address(&self.address)
    }

    /// Demo Safe used when no configuration exists.
    #[must_use]
    pub fn demo() -> Self {
        let now = Utc::now();
        Self {
            address: "0x7a9C1f3B5e2D4c6A8b0E1F2a3B4c5D6e7F8a9B0c".to_string(),
            chain: "Gnosis Chain".to_string(),
            threshold: 2,
            owners: vec![
                "0x1111aAaA2222bBbB3333cCcC4444dDdD5555eEeE".to_string(),
                "0x6666fFfF7777aAaA8888bBbB9999cCcC0000dDdD".to_string(),
                "0xAbCd000011112222333344445555666677778888".to_string(),
            ],
            nonce: 12,
            balances: vec![
                TokenBalance::new("xDAI", 1_250),
                TokenBalance::new("ETH", 14),
                TokenBalance::new("GNO", 320),
            ],
            queue: vec![
                QueuedTx {
                    nonce: 12,
                    to: "0x9999aAaA8888bBbB7777cCcC6666dDdD5555eEeE".to_string(),
                    token: "xDAI".to_string(),
                    value: 300,
                    confirmations: 1,
                    submitted_at: now - Duration::minutes(42),
                },
                QueuedTx {
                    nonce: 13,
                    to: "0x4444fFfF3333aAaA2222bBbB1111cCcC0000dDdD".to_string(),
                    token: "GNO".to_string(),
                    value: 25,
                    confirmations: 2,
                    submitted_at: now - Duration::hours(5),
                },
            ],
        }
    }
}

impl Default for Safe {
    fn default() -> Self {
        Self::demo()
    }
}

/// Shorten an address to its first six and last four characters.
#[must_use]
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
