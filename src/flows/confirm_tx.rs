//! Confirmation of a proposed transaction

use chrono::Utc;
use ratatui::crossterm::event::KeyCode;
use ratatui::text::Line;

use super::{FlowOutcome, build_status_line, field_line, hint_line};
use crate::tx::TxContext;
use crate::wallet::{QueuedTx, short_address};

/// Add the current owner's confirmation to a queued transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmProposedTx {
    tx: QueuedTx,
}

impl ConfirmProposedTx {
    pub(super) fn mount(tx: QueuedTx, ctx: &mut TxContext) -> Self {
        let _ = ctx.load_existing(&tx);
        Self { tx }
    }

    pub(super) fn handle_key(&self, code: KeyCode, ctx: &TxContext) -> FlowOutcome {
        if code != KeyCode::Enter || ctx.safe_tx().is_none() {
            return FlowOutcome::Continue;
        }
        let confirmations = self.tx.confirmations.saturating_add(1);
        FlowOutcome::Complete(format!(
            "Confirmed transaction #{} ({confirmations} of {})",
            self.tx.nonce,
            ctx.safe().threshold
        ))
    }

    pub(super) fn lines(&self, ctx: &TxContext) -> Vec<Line<'static>> {
        let threshold = ctx.safe().threshold;
        let executable = self.tx.confirmations.saturating_add(1) >= threshold;
        vec![
            field_line("Nonce", self.tx.nonce.to_string()),
            field_line("Send", format!("{} {}", self.tx.value, self.tx.token)),
            field_line("To", short_address(&self.tx.to)),
            field_line(
                "Signers",
                format!("{} of {threshold}", self.tx.confirmations),
            ),
            field_line("Proposed", self.tx.age(Utc::now())),
            Line::from(""),
            build_status_line(
                ctx,
                if executable {
                    "Your confirmation makes it executable"
                } else {
                    "More confirmations needed after yours"
                },
            ),
            Line::from(""),
            hint_line("Enter confirm  Esc cancel"),
        ]
    }
}
