//! Per-parameter sample history for the inspector.
//!
//! [`HistoryStore`] is the plain, single-threaded store; [`SharedHistory`]
//! wraps it for the sampler-task / render-loop split with snapshot-on-read
//! semantics.

pub mod shared;
pub mod store;

pub use shared::SharedHistory;
pub use store::HistoryStore;
