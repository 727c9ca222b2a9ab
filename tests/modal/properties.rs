//! Property checks for the single-slot store

use proptest::prelude::*;
use safedeck::flows::descriptor;
use safedeck::modal::{
    ModalController, ModalType, NewTxProps, RejectTxProps, ReplaceTxProps, SendTokensProps,
    VisibleModal,
};
use safedeck::wallet::Safe;

use crate::common::{Recorder, TestFixture};

fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(64);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

#[derive(Debug, Clone)]
enum Op {
    Open(VisibleModal),
    Close,
    Navigate,
}

fn modal_strategy() -> impl Strategy<Value = VisibleModal> {
    prop_oneof![
        ("[A-Za-z]{1,5}", any::<u64>(), proptest::option::of(any::<u64>())).prop_map(
            |(token, amount, tx_nonce)| VisibleModal::from(SendTokensProps {
                token,
                amount,
                tx_nonce,
            })
        ),
        any::<u64>().prop_map(|nonce| VisibleModal::from(RejectTxProps { nonce })),
        any::<u64>().prop_map(|nonce| VisibleModal::from(ReplaceTxProps { nonce })),
        Just(VisibleModal::from(NewTxProps)),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => modal_strategy().prop_map(Op::Open),
        1 => Just(Op::Close),
        1 => Just(Op::Navigate),
    ]
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_store_matches_single_slot_model(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let controller = ModalController::new();
        let recorder = Recorder::attach(&controller);
        let mut model: Option<VisibleModal> = None;
        let mut expected_notifications = 0;

        for op in ops {
            match op {
                Op::Open(modal) => {
                    controller.open(modal.clone());
                    model = Some(modal);
                    expected_notifications += 1;
                }
                Op::Close => {
                    controller.close();
                    if model.take().is_some() {
                        expected_notifications += 1;
                    }
                }
                Op::Navigate => {
                    controller.on_navigation_complete();
                    if model.take().is_some() {
                        expected_notifications += 1;
                    }
                }
            }
            prop_assert_eq!(controller.current(), model.clone());
        }
        prop_assert_eq!(recorder.count(), expected_notifications);
    }

    #[test]
    fn prop_host_mount_follows_store(ops in proptest::collection::vec(op_strategy(), 0..20)) {
        let fixture = TestFixture::new();
        let host = fixture.host();

        for op in ops {
            match op {
                Op::Open(modal) => host.open(modal),
                Op::Close => host.close(),
                Op::Navigate => fixture.controller.on_navigation_complete(),
            }
            let mounted = host.with_mounted(|mounted| mounted.modal().clone());
            prop_assert_eq!(mounted, host.current());
        }
    }
}

#[test]
fn test_every_modal_type_has_a_descriptor() {
    for kind in ModalType::ALL {
        let descriptor = descriptor(kind);
        assert!(!descriptor.title.trim().is_empty(), "{kind} has no title");
        assert!(descriptor.width_percent > 0 && descriptor.width_percent <= 100);
    }
}

#[test]
fn test_every_modal_type_mounts() {
    let safe = Safe::demo();
    let queued = safe.queue.first().cloned();
    let fixture = TestFixture::new();
    let host = fixture.host();

    let mut modals = vec![
        VisibleModal::from(SendTokensProps::new("ETH", 10)),
        VisibleModal::from(RejectTxProps { nonce: 12 }),
        VisibleModal::from(ReplaceTxProps { nonce: 12 }),
        VisibleModal::from(NewTxProps),
    ];
    if let Some(tx) = queued {
        modals.push(VisibleModal::from(safedeck::modal::ConfirmTxProps { tx }));
    }
    assert_eq!(modals.len(), ModalType::ALL.len());

    for modal in modals {
        let kind = modal.modal_type();
        host.open(modal);
        assert_eq!(
            host.with_mounted(|mounted| mounted.flow().modal_type()),
            Some(kind)
        );
        assert!(host.with_mounted(|mounted| !mounted.lines().is_empty()).unwrap_or(false));
    }
}
