//! New transaction menu

use ratatui::crossterm::event::KeyCode;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::{FlowOutcome, MenuCursor, hint_line};
use crate::modal::{ReplaceTxProps, SendTokensProps};
use crate::tui::render::colors;
use crate::tx::TxContext;

const ENTRIES: [(&str, &str); 2] = [
    ("Send tokens", "Transfer tokens held by the Safe"),
    ("Replace queued", "Replace the next queued transaction"),
];

/// Pick what kind of transaction to create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewTxMenu {
    cursor: MenuCursor,
}

impl NewTxMenu {
    pub(super) fn handle_key(&mut self, code: KeyCode, ctx: &TxContext) -> FlowOutcome {
        if self.cursor.handle_key(code, ENTRIES.len()) || code != KeyCode::Enter {
            return FlowOutcome::Continue;
        }

        let safe = ctx.safe();
        if self.cursor.selected() == 0 {
            safe.balances.first().map_or(FlowOutcome::Continue, |balance| {
                FlowOutcome::Open(SendTokensProps::new(balance.symbol.clone(), 1).into())
            })
        } else {
            safe.queue
                .iter()
                .map(|tx| tx.nonce)
                .min()
                .map_or(FlowOutcome::Continue, |nonce| {
                    FlowOutcome::Open(ReplaceTxProps { nonce }.into())
                })
        }
    }

    pub(super) fn lines(self, ctx: &TxContext) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("New transaction at nonce {}", ctx.recommended_nonce()),
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
