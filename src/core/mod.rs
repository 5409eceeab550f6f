//! Business rules: the ledger manager and the stateless services it delegates to.

pub mod ledger_manager;
pub mod services;
pub mod time;

pub use ledger_manager::{LedgerManager, LoadOutcome};
pub use time::{Clock, FixedClock, SystemClock};
