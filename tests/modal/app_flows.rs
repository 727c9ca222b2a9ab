//! End-to-end key sequences through `App`

use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rstest::rstest;
use safedeck::modal::{ModalType, ReplaceTxProps, SendTokensProps, VisibleModal};
use safedeck::navigation::Route;
use safedeck::{App, Config};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn open_type(app: &App) -> Option<ModalType> {
    app.modals.current().as_ref().map(VisibleModal::modal_type)
}

#[test]
fn test_replace_then_send_completes_at_the_queued_nonce() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.route(), Route::Transactions);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(
        app.modals.current(),
        Some(VisibleModal::ReplaceTx(ReplaceTxProps { nonce: 12 }))
    );

    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.modals.current(),
        Some(VisibleModal::SendTokens(SendTokensProps {
            token: "xDAI".to_string(),
            amount: 1,
            tx_nonce: Some(12),
        }))
    );

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.modals.current(), None);
    assert_eq!(
        app.status.as_deref(),
        Some("Proposed transfer of 1 xDAI at nonce 12")
    );
}

#[test]
fn test_new_tx_menu_leads_to_transfer() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(open_type(&app), Some(ModalType::NewTx));

    press(&mut app, KeyCode::Enter);
    assert_eq!(open_type(&app), Some(ModalType::SendTokens));
    assert!(app.modals.is_open());
}

#[rstest]
#[case(KeyCode::Tab)]
#[case(KeyCode::BackTab)]
fn test_page_switch_dismisses_any_flow(#[case] key: KeyCode) {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('s'));
    assert!(app.modals.is_open());

    let before = app.route();
    press(&mut app, key);
    assert_ne!(app.route(), before);
    assert_eq!(app.modals.current(), None);
    assert!(!app.modals.is_open());
}

#[test]
fn test_escape_closes_without_status() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(open_type(&app), Some(ModalType::RejectTx));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.modals.current(), None);
    assert_eq!(app.status, None);
}
