#![doc(test(attr(deny(warnings))))]

//! FinanceFlow keeps a personal ledger of incomes, expenses, category budgets
//! and savings goals, refusing any change that would overspend, and persists
//! the whole ledger as a single JSON document after every mutation.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("FinanceFlow tracing initialized.");
    });
}
