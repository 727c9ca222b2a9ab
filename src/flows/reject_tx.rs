//! On-chain rejection flow

use ratatui::crossterm::event::KeyCode;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::{FlowOutcome, build_status_line, field_line, hint_line};
use crate::modal::RejectTxProps;
use crate::tui::render::colors;
use crate::tx::TxContext;
use crate::wallet::short_address;

/// Propose an empty transaction at the nonce of a queued one, cancelling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectTxFlow {
    nonce: u64,
}

impl RejectTxFlow {
    pub(super) fn mount(props: RejectTxProps, ctx: &mut TxContext) -> Self {
        let _ = ctx.build_rejection(props.nonce);
        Self { nonce: props.nonce }
    }

    pub(super) fn handle_key(self, code: KeyCode, ctx: &TxContext) -> FlowOutcome {
        if code != KeyCode::Enter || ctx.safe_tx().is_none() {
            return FlowOutcome::Continue;
        }
        FlowOutcome::Complete(format!("Proposed rejection for nonce {}", self.nonce))
    }

    pub(super) fn lines(self, ctx: &TxContext) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "An on-chain rejection is an empty transaction to the Safe itself.",
                Style::default().fg(colors::TEXT_PRIMARY),
            )),
            Line::from(Span::styled(
                format!(
                    "Executing it at nonce {} cancels the queued transaction.",
                    self.nonce
                ),
                Style::default().fg(colors::TEXT_PRIMARY),
            )),
            Line::from(""),
            field_line("Nonce", self.nonce.to_string()),
        ];

        if let Some(queued) = ctx.safe().queued(self.nonce) {
            lines.push(field_line(
                "Replaces",
                format!(
                    "{} {} to {}",
                    queued.value,
                    queued.token,
                    short_address(&queued.to)
                ),
            ));
        }

        lines.push(Line::from(""));
        lines.push(build_status_line(ctx, "Rejection ready"));
        lines.push(Line::from(""));
        lines.push(hint_line("Enter reject  Esc cancel"));
        lines
    }
}
