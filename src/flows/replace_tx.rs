//! Replacement menu for a queued transaction

use ratatui::crossterm::event::KeyCode;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::{FlowOutcome, MenuCursor, hint_line};
use crate::modal::{RejectTxProps, ReplaceTxProps, SendTokensProps};
use crate::tui::render::colors;
use crate::tx::TxContext;

const ENTRIES: [(&str, &str); 2] = [
    ("Send tokens", "Propose a different transfer at the same nonce"),
    ("Reject transaction", "Propose an empty transaction at the same nonce"),
];

/// Choose how to replace the transaction queued at a nonce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceTxMenu {
    nonce: u64,
    cursor: MenuCursor,
}

impl ReplaceTxMenu {
    pub(super) fn mount(props: ReplaceTxProps, ctx: &mut TxContext) -> Self {
        ctx.set_nonce(props.nonce);
        Self {
            nonce: props.nonce,
            cursor: MenuCursor::default(),
        }
    }

    pub(super) fn handle_key(&mut self, code: KeyCode, ctx: &TxContext) -> FlowOutcome {
        if self.cursor.handle_key(code, ENTRIES.len()) || code != KeyCode::Enter {
            return FlowOutcome::Continue;
        }

        if self.cursor.selected() == 0 {
            let token = ctx
                .safe()
                .queued(self.nonce)
                .map(|tx| tx.token.clone())
                .or_else(|| ctx.safe().balances.first().map(|b| b.symbol.clone()))
                .unwrap_or_default();
            FlowOutcome::Open(
                SendTokensProps {
                    token,
                    amount: 1,
                    tx_nonce: Some(self.nonce),
                }
                .into(),
            )
        } else {
            FlowOutcome::Open(RejectTxProps { nonce: self.nonce }.into())
        }
    }

    pub(super) fn lines(&self, _ctx: &TxContext) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Replace the transaction queued at nonce {}:", self.nonce),
                Style::default().fg(colors::TEXT_PRIMARY),
            )),
            Line::from(""),
        ];
        lines.extend(self.cursor.lines(&ENTRIES));
        lines.push(Line::from(""));
        lines.push(hint_line("↑/↓ select  Enter continue  Esc cancel"));
        lines
    }
}
