//! Transaction flows hosted by the modal dialog
//!
//! Each [`ModalType`] resolves to exactly one flow. Resolution is an
//! exhaustive `match`, so adding a modal type without a flow fails to compile.
//! Flows render into lines of text for the dialog shell and react to keys by
//! returning a [`FlowOutcome`] the host applies to the modal controller.

mod confirm_tx;
mod new_tx;
mod reject_tx;
mod replace_tx;
mod token_transfer;

pub use confirm_tx::ConfirmProposedTx;
pub use new_tx::NewTxMenu;
pub use reject_tx::RejectTxFlow;
pub use replace_tx::ReplaceTxMenu;
pub use token_transfer::TokenTransferFlow;

use ratatui::crossterm::event::KeyCode;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::modal::{ModalType, VisibleModal};
use crate::tui::render::colors;
use crate::tx::TxContext;

/// What the host should do after a flow handled a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Keep the flow open.
    Continue,
    /// Dismiss the modal without doing anything.
    Close,
    /// Replace this modal with another one.
    Open(VisibleModal),
    /// The flow finished; dismiss the modal and report the message.
    Complete(String),
}

/// Static presentation data for a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowDescriptor {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog width as a percentage of the screen.
    pub width_percent: u16,
    /// Border color.
    pub accent: Color,
}

/// Presentation data for `kind`
#[must_use]
pub const fn descriptor(kind: ModalType) -> FlowDescriptor {
    match kind {
        ModalType::SendTokens => FlowDescriptor {
            title: " Send tokens ",
            width_percent: 60,
            accent: colors::SELECTED,
        },
        ModalType::RejectTx => FlowDescriptor {
            title: " Reject transaction ",
            width_percent: 55,
            accent: colors::MODAL_BORDER_ERROR,
        },
        ModalType::ReplaceTx => FlowDescriptor {
            title: " Replace transaction ",
            width_percent: 50,
            accent: colors::MODAL_BORDER_WARNING,
        },
        ModalType::NewTx => FlowDescriptor {
            title: " New transaction ",
            width_percent: 50,
            accent: colors::SELECTED,
        },
        ModalType::ConfirmTx => FlowDescriptor {
            title: " Confirm transaction ",
            width_percent: 60,
            accent: colors::ACCENT_POSITIVE,
        },
    }
}

/// The mounted flow for the visible modal.
#[derive(Debug)]
pub enum FlowState {
    /// Token transfer.
    SendTokens(TokenTransferFlow),
    /// On-chain rejection.
    RejectTx(RejectTxFlow),
    /// Replacement menu.
    ReplaceTx(ReplaceTxMenu),
    /// New transaction menu.
    NewTx(NewTxMenu),
    /// Confirmation of a proposed transaction.
    ConfirmTx(ConfirmProposedTx),
}

impl FlowState {
    /// Create the flow for `modal`, letting it prepare `ctx`
    #[must_use]
    pub fn mount(modal: &VisibleModal, ctx: &mut TxContext) -> Self {
        match modal {
            VisibleModal::SendTokens(props) => {
                Self::SendTokens(TokenTransferFlow::mount(props, ctx))
            }
            VisibleModal::RejectTx(props) => Self::RejectTx(RejectTxFlow::mount(*props, ctx)),
            VisibleModal::ReplaceTx(props) => Self::ReplaceTx(ReplaceTxMenu::mount(*props, ctx)),
            VisibleModal::NewTx(_) => Self::NewTx(NewTxMenu::default()),
            VisibleModal::ConfirmTx(props) => {
                Self::ConfirmTx(ConfirmProposedTx::mount(props.tx.clone(), ctx))
            }
        }
    }

    /// The modal type this flow belongs to
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

    /// Dialog content
    #[must_use]
    pub fn lines(&self, ctx: &TxContext) -> Vec<Line<'static>> {
        match self {
            Self::SendTokens(flow) => flow.lines(ctx),
            Self::RejectTx(flow) => flow.lines(ctx),
            Self::ReplaceTx(flow) => flow.lines(ctx),
            Self::NewTx(flow) => flow.lines(ctx),
            Self::ConfirmTx(flow) => flow.lines(ctx),
        }
    }

    /// React to a key press
    pub fn handle_key(&mut self, code: KeyCode, ctx: &mut TxContext) -> FlowOutcome {
        if code == KeyCode::Esc {
            return FlowOutcome::Close;
        }
        match self {
            Self::SendTokens(flow) => flow.handle_key(code, ctx),
            Self::RejectTx(flow) => flow.handle_key(code, ctx),
            Self::ReplaceTx(flow) => flow.handle_key(code, ctx),
            Self::NewTx(flow) => flow.handle_key(code, ctx),
            Self::ConfirmTx(flow) => flow.handle_key(code, ctx),
        }
    }
}

/// Cursor over a fixed list of menu entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MenuCursor {
    selected: usize,
}

impl MenuCursor {
    pub(crate) const fn selected(self) -> usize {
        self.selected
    }

    /// Move with Up/Down. Returns `true` if the key was a movement key.
    pub(crate) const fn handle_key(&mut self, code: KeyCode, len: usize) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                true
            }
            _ => false,
        }
    }

    pub(crate) fn lines(self, entries: &[(&str, &str)]) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(entries.len() * 2);
        for (index, (label, description)) in entries.iter().enumerate() {
            let (marker, style) = if index == self.selected {
                (
                    "▶ ",
                    Style::default()
                        .fg(colors::SELECTED)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(colors::TEXT_PRIMARY))
            };
            lines.push(Line::from(Span::styled(format!("{marker}{label}"), style)));
            lines.push(Line::from(Span::styled(
                format!("    {description}"),
                Style::default().fg(colors::TEXT_DIM),
            )));
        }
        lines
    }
}

fn field_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(colors::TEXT_DIM)),
        Span::styled(value, Style::default().fg(colors::TEXT_PRIMARY)),
    ])
}

fn hint_line(hint: &str) -> Line<'static> {
    Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(colors::TEXT_MUTED),
    ))
}

/// Either the build error or a ready marker for the session's transaction.
fn build_status_line(ctx: &TxContext, ready: &str) -> Line<'static> {
    match (ctx.error(), ctx.safe_tx()) {
        (Some(err), _) => Line::from(Span::styled(
            format!("✖ {err}"),
            Style::default().fg(colors::ACCENT_NEGATIVE),
        )),
        (None, Some(_)) => Line::from(Span::styled(
            format!("✔ {ready}"),
            Style::default().fg(colors::ACCENT_POSITIVE),
        )),
        (None, None) => Line::from(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{
        ConfirmTxProps, NewTxProps, RejectTxProps, ReplaceTxProps, SendTokensProps,
    };
    use crate::wallet::Safe;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::Arc;

    fn context() -> TxContext {
        TxContext::new(Arc::new(Safe::demo()))
    }

    fn record_for(kind: ModalType) -> VisibleModal {
        match kind {
            ModalType::SendTokens => SendTokensProps::new("ETH", 10).into(),
            ModalType::RejectTx => RejectTxProps { nonce: 12 }.into(),
            ModalType::ReplaceTx => ReplaceTxProps { nonce: 13 }.into(),
            ModalType::NewTx => NewTxProps.into(),
            ModalType::ConfirmTx => ConfirmTxProps {
                tx: Safe::demo().queue.remove(0),
            }
            .into(),
        }
    }

    #[rstest]
    #[case(ModalType::SendTokens)]
    #[case(ModalType::RejectTx)]
    #[case(ModalType::ReplaceTx)]
    #[case(ModalType::NewTx)]
    #[case(ModalType::ConfirmTx)]
    fn test_every_type_resolves_to_a_flow(#[case] kind: ModalType) {
        let descriptor = descriptor(kind);
        assert!(!descriptor.title.trim().is_empty());
        assert!(descriptor.width_percent > 0 && descriptor.width_percent <= 100);

        let mut ctx = context();
        let flow = FlowState::mount(&record_for(kind), &mut ctx);
        assert_eq!(flow.modal_type(), kind);
        assert!(!flow.lines(&ctx).is_empty());
    }

    #[rstest]
    #[case(ModalType::SendTokens)]
    #[case(ModalType::RejectTx)]
    #[case(ModalType::ReplaceTx)]
    #[case(ModalType::NewTx)]
    #[case(ModalType::ConfirmTx)]
    fn test_escape_closes_every_flow(#[case] kind: ModalType) {
        let mut ctx = context();
        let mut flow = FlowState::mount(&record_for(kind), &mut ctx);
        assert_eq!(flow.handle_key(KeyCode::Esc, &mut ctx), FlowOutcome::Close);
    }

    #[test]
    fn test_menu_cursor_stays_in_bounds() {
        let mut cursor = MenuCursor::default();
        assert!(cursor.handle_key(KeyCode::Up, 2));
        assert_eq!(cursor.selected(), 0);
        cursor.handle_key(KeyCode::Down, 2);
        cursor.handle_key(KeyCode::Down, 2);
        assert_eq!(cursor.selected(), 1);
        assert!(!cursor.handle_key(KeyCode::Enter, 2));
    }
}
