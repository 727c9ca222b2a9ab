//! Transaction building shared by the modal flows

mod context;

pub use context::{SafeTransaction, TxBuildError, TxContext};
