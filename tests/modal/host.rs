//! Host lifecycle: mounting, release on close and navigation wiring

use std::sync::Arc;

use pretty_assertions::assert_eq;
use safedeck::modal::{ModalType, NewTxProps, RejectTxProps, SendTokensProps, VisibleModal};
use safedeck::navigation::Route;

use crate::common::TestFixture;

#[test]
fn test_router_navigation_dismisses_the_modal() {
    let fixture = TestFixture::new();
    let host = fixture.host();
    let mut router = fixture.router();

    host.open(RejectTxProps { nonce: 4 });
    assert!(host.is_open());

    assert!(router.push(Route::Transactions));
    assert_eq!(host.current(), None);
    assert!(!host.is_open());
}

#[test]
fn test_pushing_the_current_route_keeps_the_modal() {
    let fixture = TestFixture::new();
    let host = fixture.host();
    let mut router = fixture.router();

    host.open(SendTokensProps::new("ETH", 2));
    assert!(!router.push(Route::Home));
    assert!(host.is_open());
}

#[test]
fn test_back_navigation_dismisses_the_modal() {
    let fixture = TestFixture::new();
    let host = fixture.host();
    let mut router = fixture.router();

    router.push(Route::Balances);
    host.open(SendTokensProps::new("GNO", 3));
    assert!(router.back());
    assert_eq!(router.current(), Route::Home);
    assert!(!host.is_open());
}

#[test]
fn test_close_releases_the_transaction_context() {
    let fixture = TestFixture::new();
    let baseline = Arc::strong_count(&fixture.safe);
    let host = fixture.host();
    let attached = Arc::strong_count(&fixture.safe);

    host.open(SendTokensProps::new("ETH", 1));
    assert!(Arc::strong_count(&fixture.safe) > attached);

    host.close();
    assert_eq!(Arc::strong_count(&fixture.safe), attached);

    drop(host);
    assert_eq!(Arc::strong_count(&fixture.safe), baseline);
}

#[test]
fn test_replacing_starts_a_fresh_session() {
    let fixture = TestFixture::new();
    let host = fixture.host();

    host.open(SendTokensProps::new("ETH", 1));
    let first = host.session();
    host.open(RejectTxProps { nonce: 12 });
    let second = host.session();

    assert!(first.is_some());
    assert!(second.is_some());
    assert_ne!(first, second);
    assert_eq!(
        host.with_mounted(|mounted| mounted.flow().modal_type()),
        Some(ModalType::RejectTx)
    );
}

#[test]
fn test_dropping_the_host_deregisters() {
    let fixture = TestFixture::new();
    let host = fixture.host();
    assert_eq!(fixture.events.handler_count(), 1);
    assert_eq!(fixture.controller.listener_count(), 1);

    drop(host);
    assert_eq!(fixture.events.handler_count(), 0);
    assert_eq!(fixture.controller.listener_count(), 0);

    // The store keeps working without a host
    fixture.controller.open(RejectTxProps { nonce: 1 });
    let mut router = fixture.router();
    router.push(Route::Relaying);
    assert!(fixture.controller.is_open());
}

#[test]
fn test_listener_reopening_during_notification_keeps_host_in_sync() {
    let fixture = TestFixture::new();
    let store = Arc::downgrade(&fixture.controller);
    fixture.controller.subscribe(move |state| {
        if matches!(state, Some(VisibleModal::NewTx(_)))
            && let Some(store) = store.upgrade()
        {
            store.open(RejectTxProps { nonce: 12 });
        }
    });
    let host = fixture.host();

    host.open(NewTxProps);

    let mounted = host.with_mounted(|mounted| mounted.modal().clone());
    assert_eq!(
        host.current(),
        Some(VisibleModal::RejectTx(RejectTxProps { nonce: 12 }))
    );
    assert_eq!(mounted, host.current());
    assert_eq!(
        host.with_mounted(|mounted| mounted.flow().modal_type()),
        Some(ModalType::RejectTx)
    );
}
