//! Key handling
//!
//! While a modal is visible, keys go to its flow. Page switching keeps
//! working so that navigating away dismisses the dialog.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::App;
use crate::flows::FlowOutcome;
use crate::navigation::Route;

impl App {
    /// Handle a key event from the terminal
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.navigate(self.route().next());
                return;
            }
            KeyCode::BackTab => {
                self.navigate(self.route().previous());
                return;
            }
            _ => {}
        }

        if self.modals.current().is_some() {
            self.handle_modal_key(key.code);
        } else {
            self.handle_page_key(key.code);
        }
    }

    fn handle_modal_key(&mut self, code: KeyCode) {
        if let FlowOutcome::Complete(message) = self.modals.handle_key(code) {
            debug!(%message, "Flow completed");
            self.status = Some(message);
        }
    }

    fn handle_page_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(key) if Route::from_shortcut(key).is_some() => {
                if let Some(route) = Route::from_shortcut(key) {
                    self.navigate(route);
                }
            }
            KeyCode::Backspace => self.go_back(),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Char('n') => self.open_new_tx(),
            KeyCode::Char('s') => self.open_send_tokens(),
            KeyCode::Char('r') if self.route() == Route::Transactions => self.open_reject_tx(),
            KeyCode::Char('p') if self.route() == Route::Transactions => self.open_replace_tx(),
            KeyCode::Char('c') if self.route() == Route::Transactions => self.open_confirm_tx(),
            KeyCode::Left | KeyCode::Right if self.route() == Route::Relaying => {
                self.relaying_focus = self.relaying_focus.toggled();
            }
            KeyCode::Enter if self.route() == Route::Relaying => {
                // The relaying steps are informational only.
                debug!(button = ?self.relaying_focus, "Relaying button pressed");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::RelayingButton;
    use crate::modal::{ModalType, RejectTxProps, SendTokensProps, VisibleModal};
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn open_type(app: &App) -> Option<ModalType> {
        app.modals.current().map(|modal| modal.modal_type())
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::default();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_does_not_quit_inside_modal() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(open_type(&app), Some(ModalType::NewTx));
    }

    #[test]
    fn test_digits_jump_to_pages() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.route(), Route::Transactions);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.route(), Route::Relaying);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.route(), Route::Transactions);
    }

    #[test]
    fn test_send_then_tab_dismisses() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(
            app.modals.current(),
            Some(VisibleModal::SendTokens(SendTokensProps::new("ETH", 1)))
        );

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route(), Route::Transactions);
        assert!(app.modals.current().is_none());
    }

    #[test]
    fn test_completed_flow_sets_status() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(
            app.modals.current(),
            Some(VisibleModal::RejectTx(RejectTxProps { nonce: 12 }))
        );

        press(&mut app, KeyCode::Enter);
        assert!(app.modals.current().is_none());
        assert_eq!(
            app.status.as_deref(),
            Some("Proposed rejection for nonce 12")
        );
    }

    #[test]
    fn test_queue_keys_only_on_transactions_page() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('r'));
        assert!(app.modals.current().is_none());
    }

    #[test]
    fn test_relaying_buttons_are_noops() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.relaying_focus, RelayingButton::Back);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), Route::Relaying);
        assert!(app.modals.current().is_none());
    }
}
