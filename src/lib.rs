#![doc(test(attr(deny(warnings))))]

//! Gastos Core implements the expense-tracking heart of a chat-bot command
//! handler: a per-user append-only expense log persisted as a single JSON
//! document, keyword-driven classification into seven fixed categories, and
//! summary/history/purge operations over the log.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Gastos Core tracing initialized.");
    });
}
