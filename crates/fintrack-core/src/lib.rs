//! fintrack-core
//!
//! Business logic and services for FinTrack.
//! Depends on fintrack-domain. No CLI, no terminal I/O; persistence only through
//! the [`storage::KeyValueStorage`] seam.

pub mod budget_service;
pub mod error;
pub mod format;
pub mod goal_service;
pub mod profile_service;
pub mod reconcile;
pub mod seed;
pub mod session;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod transaction_service;

#[cfg(test)]
mod tests;

pub use budget_service::*;
pub use error::CoreError;
pub use goal_service::*;
pub use profile_service::*;
pub use reconcile::{
    materialize_due, reconcile, snapshot_schedules, Reconciliation, ScheduleSnapshot,
    ScheduleStatus,
};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use session::{OpenReport, UserSession};
pub use summary_service::*;
pub use time::{Clock, FixedClock, SystemClock};
pub use transaction_service::*;
