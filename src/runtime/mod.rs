//! Reactive runtime - attach/detach lifecycle and the growth ledger.

mod ledger;
mod mount;

pub use mount::{attach, detach};
