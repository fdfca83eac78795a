//! Account and ledger domain models held in memory for a session.

pub mod account;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use account::Account;
pub use ledger::Ledger;
