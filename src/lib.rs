#![doc(test(attr(deny(warnings))))]

//! Bank Sim is an interactive, in-memory bank account simulator: named
//! accounts, deposits, withdrawals and balance checks driven from a menu loop.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bank Sim tracing initialized.");
    });
}
