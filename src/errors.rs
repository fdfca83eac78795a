use std::io;

use rust_decimal::Decimal;
use thiserror::Error;

/// Failures raised by account operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("deposit of {amount} would overflow balance {balance}")]
    BalanceOverflow { amount: Decimal, balance: Decimal },
}

/// Reasons an amount typed at a prompt is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("amount must not be negative")]
    Negative,
    #[error("amount must be greater than zero")]
    NotPositive,
}

/// Faults of the input/output collaborator.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("terminal prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),
    #[error("input closed before prompt `{prompt}`")]
    EndOfInput { prompt: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BANK_SIM_CONFIG: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Top-level error surfaced by the CLI entry points.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
