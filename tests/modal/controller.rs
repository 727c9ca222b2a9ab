//! Single-slot store behavior seen through subscribers

use pretty_assertions::assert_eq;
use safedeck::modal::{
    ModalController, ModalType, NewTxProps, RejectTxProps, ReplaceTxProps, SendTokensProps,
    VisibleModal,
};

use crate::common::Recorder;

#[test]
fn test_scenario_open_close_then_navigation_dismisses() {
    let controller = ModalController::new();

    controller.open(SendTokensProps::new("ETH", 10));
    assert_eq!(
        controller.current(),
        Some(VisibleModal::SendTokens(SendTokensProps {
            token: "ETH".to_string(),
            amount: 10,
            tx_nonce: None,
        }))
    );

    controller.close();
    assert_eq!(controller.current(), None);

    controller.open(RejectTxProps { nonce: 4 });
    controller.on_navigation_complete();
    assert_eq!(controller.current(), None);
}

#[test]
fn test_open_replaces_instead_of_stacking() {
    let controller = ModalController::new();
    controller.open(NewTxProps);
    controller.open(ReplaceTxProps { nonce: 7 });
    assert_eq!(
        controller.current(),
        Some(VisibleModal::ReplaceTx(ReplaceTxProps { nonce: 7 }))
    );

    // One close is enough: nothing was stacked underneath
    controller.close();
    assert!(!controller.is_open());
}

#[test]
fn test_listeners_see_each_transition_once() {
    let controller = ModalController::new();
    let recorder = Recorder::attach(&controller);

    controller.open(NewTxProps);
    controller.open(SendTokensProps::new("xDAI", 1));
    controller.close();
    controller.close();
    controller.on_navigation_complete();

    assert_eq!(
        recorder.types(),
        vec![Some(ModalType::NewTx), Some(ModalType::SendTokens), None]
    );
}

#[test]
fn test_navigation_while_closed_is_silent() {
    let controller = ModalController::new();
    let recorder = Recorder::attach(&controller);

    controller.on_navigation_complete();
    assert_eq!(recorder.count(), 0);
    assert_eq!(controller.current(), None);
}

#[test]
fn test_unsubscribed_listener_is_not_called() {
    let controller = ModalController::new();
    let recorder = Recorder::attach(&controller);
    let id = controller.subscribe(|_| {});
    assert_eq!(controller.listener_count(), 2);

    assert!(controller.unsubscribe(id));
    assert!(!controller.unsubscribe(id));
    assert_eq!(controller.listener_count(), 1);

    controller.open(NewTxProps);
    assert_eq!(recorder.count(), 1);
}
