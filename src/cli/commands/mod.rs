//! Menu commands and their pure dispatch onto the ledger.

pub mod account_handlers;

use rust_decimal::Decimal;

use crate::cli::output::MessageKind;
use crate::currency::{format_amount, CurrencyCode};
use crate::errors::AccountError;
use crate::ledger::Ledger;

pub const UNKNOWN_ACTION: &str = "Unknown action.";
pub const FAREWELL: &str = "Goodbye!";

/// One variant per menu action, carrying exactly the fields it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateAccount {
        holder: String,
        initial_balance: Decimal,
    },
    Deposit {
        holder: String,
        amount: Decimal,
    },
    Withdraw {
        holder: String,
        amount: Decimal,
    },
    CheckBalance {
        holder: String,
    },
    Exit,
}

/// Result of applying a [`Command`], rendered for the user by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    AccountCreated {
        holder: String,
        initial_balance: Decimal,
    },
    Deposited {
        amount: Decimal,
        balance: Decimal,
    },
    Withdrew {
        amount: Decimal,
        balance: Decimal,
    },
    InsufficientFunds {
        balance: Decimal,
    },
    BalanceLimit {
        balance: Decimal,
    },
    Balance {
        holder: String,
        balance: Decimal,
    },
    NotFound {
        holder: String,
    },
    Farewell,
}

impl Outcome {
    pub fn kind(&self) -> MessageKind {
        match self {
            Outcome::AccountCreated { .. } | Outcome::Deposited { .. } | Outcome::Withdrew { .. } => {
                MessageKind::Success
            }
            Outcome::InsufficientFunds { .. }
            | Outcome::BalanceLimit { .. }
            | Outcome::NotFound { .. } => MessageKind::Warning,
            Outcome::Balance { .. } | Outcome::Farewell => MessageKind::Info,
        }
    }

    pub fn message(&self, currency: &CurrencyCode) -> String {
        let money = |value: &Decimal| format_amount(*value, currency);
        match self {
            Outcome::AccountCreated {
                holder,
                initial_balance,
            } => format!(
                "Account for {holder} created with initial balance {}.",
                money(initial_balance)
            ),
            Outcome::Deposited { amount, balance } => format!(
                "Deposited {}. New balance is {}.",
                money(amount),
                money(balance)
            ),
            Outcome::Withdrew { amount, balance } => format!(
                "Withdrew {}. New balance is {}.",
                money(amount),
                money(balance)
            ),
            Outcome::InsufficientFunds { balance } => {
                format!("Insufficient funds. Current balance is {}.", money(balance))
            }
            Outcome::BalanceLimit { balance } => format!(
                "Deposit rejected: balance limit reached. Current balance is {}.",
                money(balance)
            ),
            Outcome::Balance { holder, balance } => {
                format!("Current balance for {holder} is {}.", money(balance))
            }
            Outcome::NotFound { holder } => format!("Account for {holder} not found."),
            Outcome::Farewell => FAREWELL.to_string(),
        }
    }

    pub fn ends_session(&self) -> bool {
        matches!(self, Outcome::Farewell)
    }
}

impl From<AccountError> for Outcome {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InsufficientFunds { available, .. } => {
                Outcome::InsufficientFunds { balance: available }
            }
            AccountError::BalanceOverflow { balance, .. } => Outcome::BalanceLimit { balance },
        }
    }
}

/// Applies `command` to `ledger`. Performs no I/O.
pub fn dispatch(ledger: &mut Ledger, command: Command) -> Outcome {
    match command {
        Command::CreateAccount {
            holder,
            initial_balance,
        } => account_handlers::handle_create(ledger, holder, initial_balance),
        Command::Deposit { holder, amount } => {
            account_handlers::handle_deposit(ledger, holder, amount)
        }
        Command::Withdraw { holder, amount } => {
            account_handlers::handle_withdraw(ledger, holder, amount)
        }
        Command::CheckBalance { holder } => account_handlers::handle_balance(ledger, holder),
        Command::Exit => Outcome::Farewell,
    }
}
