//! Token transfer flow

use ratatui::crossterm::event::KeyCode;
use ratatui::text::Line;

use super::{FlowOutcome, build_status_line, field_line, hint_line};
use crate::modal::SendTokensProps;
use crate::tx::TxContext;
use crate::wallet::short_address;

/// Send an amount of one of the Safe's tokens to one of its owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransferFlow {
    token: String,
    amount: u64,
    tx_nonce: Option<u64>,
    recipient: usize,
}

impl TokenTransferFlow {
    pub(super) fn mount(props: &SendTokensProps, ctx: &mut TxContext) -> Self {
        if let Some(nonce) = props.tx_nonce {
            ctx.set_nonce(nonce);
        }
        let flow = Self {
            token: props.token.clone(),
            amount: props.amount,
            tx_nonce: props.tx_nonce,
            recipient: 0,
        };
        flow.rebuild(ctx);
        flow
    }

    /// Token being sent
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Amount being sent
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.amount
    }

    fn recipient<'a>(&self, ctx: &'a TxContext) -> &'a str {
        ctx.safe()
            .owners
            .get(self.recipient)
            .map_or(ctx.safe().address.as_str(), String::as_str)
    }

    fn rebuild(&self, ctx: &mut TxContext) {
        let to = self.recipient(ctx).to_string();
        let _ = ctx.build_transfer(&self.token, self.amount, &to);
    }

    fn cycle_token(&mut self, ctx: &TxContext, forward: bool) {
        let balances = &ctx.safe().balances;
        if balances.is_empty() {
            return;
        }
        let current = balances
            .iter()
            .position(|balance| balance.symbol.eq_ignore_ascii_case(&self.token));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(index), true) => (index + 1) % balances.len(),
            (Some(index), false) => (index + balances.len() - 1) % balances.len(),
        };
        self.token.clone_from(&balances[next].symbol);
    }

    pub(super) fn handle_key(&mut self, code: KeyCode, ctx: &mut TxContext) -> FlowOutcome {
        match code {
            KeyCode::Up => self.amount = self.amount.saturating_add(1),
            KeyCode::Down => self.amount = self.amount.saturating_sub(1),
            KeyCode::Right => self.cycle_token(ctx, true),
            KeyCode::Left => self.cycle_token(ctx, false),
            KeyCode::Char('o') => {
                let owners = ctx.safe().owners.len().max(1);
                self.recipient = (self.recipient + 1) % owners;
            }
            KeyCode::Enter => {
                return ctx.safe_tx().map_or(FlowOutcome::Continue, |tx| {
                    FlowOutcome::Complete(format!(
                        "Proposed transfer of {} {} at nonce {}",
                        tx.value, tx.token, tx.nonce
                    ))
                });
            }
            _ => return FlowOutcome::Continue,
        }
        self.rebuild(ctx);
        FlowOutcome::Continue
    }

    pub(super) fn lines(&self, ctx: &TxContext) -> Vec<Line<'static>> {
        let balance = ctx
            .safe()
            .balance(&self.token)
            .map_or_else(|| "no balance".to_string(), |b| format!("balance {}", b.amount));
        let nonce = match self.tx_nonce {
            Some(nonce) => format!("{nonce} (replaces queued #{nonce})"),
            None => ctx.nonce().to_string(),
        };

        vec![
            field_line("Token", format!("{}  ({balance})", self.token)),
            field_line("Amount", self.amount.to_string()),
            field_line("To", short_address(self.recipient(ctx))),
            field_line("Nonce", nonce),
            Line::from(""),
            build_status_line(ctx, "Ready to propose"),
            Line::from(""),
            hint_line("↑/↓ amount  ←/→ token  o recipient  Enter propose  Esc cancel"),
        ]
    }
}
