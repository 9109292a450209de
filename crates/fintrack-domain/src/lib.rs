//! fintrack-domain
//!
//! Pure domain models (Transaction, RecurringSchedule, UserProfile, SavingGoal, etc.).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod category;
pub mod common;
pub mod goal;
pub mod profile;
pub mod schedule;
pub mod transaction;
pub mod user_data;

pub use category::*;
pub use common::*;
pub use goal::*;
pub use profile::*;
pub use schedule::*;
pub use transaction::*;
pub use user_data::*;
