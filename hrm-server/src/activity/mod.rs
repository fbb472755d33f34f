//! Activity log module
//!
//! Append-only audit trail of user actions. Writes flow through a bounded
//! queue drained by [`worker::ActivityWorker`] so that an entry's fate never
//! affects the latency or outcome of the request that produced it.

pub mod service;
pub mod storage;
pub mod types;
pub mod worker;

pub use service::ActivityService;
pub use storage::ActivityStorage;
pub use types::{
    ActivityAction, ActivityEntry, ActivityListResponse, ActivityModule, ActivityQuery,
};
pub use worker::ActivityWorker;
