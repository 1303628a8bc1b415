//! Starter packs per country: the local state file and keeping it in step
//! with what is published.

pub mod reconciler;
pub mod store;
pub mod sync;

pub use reconciler::{add_member, pack_name, timestamp, Outcome, ReconcileError, Reconciler};
pub use store::{PackRecord, PackStore, StoreError};
pub use sync::{pull, push};
