//! Pure domain models (Ledger, UserRecord, Expense, summary reports).
//! No I/O, no CLI, no storage. Only data types and the wire schema.

pub mod expense;
pub mod ledger;

pub use expense::*;
pub use ledger::*;
