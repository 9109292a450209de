//! fintrack-config
//!
//! Persistent user preferences for the FinTrack front end.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, Language};
