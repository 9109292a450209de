#![doc(test(attr(deny(warnings))))]

//! FinTrack is a personal finance tracker: transactions, monthly budgets,
//! saving goals and the salary and recurring items that are materialized once
//! per calendar month.
//!
//! The building blocks live in the workspace crates (`fintrack-domain`,
//! `fintrack-core`, `fintrack-storage-json`, `fintrack-config`); this crate adds
//! tracing setup, the unified error type and the `fintrack` command-line front end.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("FinTrack tracing initialized.");
    });
}
