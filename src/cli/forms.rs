//! Validated collection of the fields each menu action needs.

use std::str::FromStr;

use rust_decimal::Decimal;
use strsim::levenshtein;

use crate::cli::commands::Command;
use crate::cli::io::Console;
use crate::errors::{PromptError, ValidationError};

pub const ACTION_PROMPT: &str = "Choose an action:";
pub const HOLDER_PROMPT: &str = "Enter account holder name:";
pub const INITIAL_BALANCE_PROMPT: &str = "Enter initial balance:";
pub const DEPOSIT_AMOUNT_PROMPT: &str = "Enter amount to deposit:";
pub const WITHDRAW_AMOUNT_PROMPT: &str = "Enter amount to withdraw:";

const SUGGESTION_DISTANCE: usize = 3;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    Exit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::CreateAccount,
        Action::Deposit,
        Action::Withdraw,
        Action::CheckBalance,
        Action::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::CreateAccount => "Create Account",
            Action::Deposit => "Deposit",
            Action::Withdraw => "Withdraw",
            Action::CheckBalance => "Check Balance",
            Action::Exit => "Exit",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|action| action.label()).collect()
    }

    /// Exact label match.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == label)
    }

    /// Closest action to a mistyped choice, if any is near enough.
    pub fn suggest(input: &str) -> Option<Self> {
        let needle = input.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .map(|action| {
                let distance = levenshtein(&needle, &action.label().to_ascii_lowercase());
                (action, distance)
            })
            .filter(|(_, distance)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(_, distance)| *distance)
            .map(|(action, _)| action)
    }
}

/// Acceptance rule for numeric prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountRule {
    /// Zero or more; used for opening balances.
    NonNegative,
    /// Strictly greater than zero; used for deposits and withdrawals.
    Positive,
}

impl AmountRule {
    pub fn parse(self, input: &str) -> Result<Decimal, ValidationError> {
        parse_amount(input, self)
    }
}

/// Parses a decimal amount and checks it against `rule`.
///
/// The whole trimmed input must be a decimal literal; `12abc`, `NaN` and the
/// empty string are rejected.
pub fn parse_amount(input: &str, rule: AmountRule) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();
    let value = Decimal::from_str(trimmed)
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
    // "-0" parses to a signed zero
    let value = if value.is_zero() { Decimal::ZERO } else { value };
    match rule {
        AmountRule::NonNegative if value.is_sign_negative() => Err(ValidationError::Negative),
        AmountRule::Positive if value <= Decimal::ZERO => Err(ValidationError::NotPositive),
        _ => Ok(value),
    }
}

/// Prompts for every field `action` needs and returns the resulting command.
pub fn collect<C: Console + ?Sized>(
    console: &mut C,
    action: Action,
) -> Result<Command, PromptError> {
    let command = match action {
        Action::CreateAccount => Command::CreateAccount {
            holder: prompt_holder(console)?,
            initial_balance: prompt_amount(
                console,
                INITIAL_BALANCE_PROMPT,
                AmountRule::NonNegative,
            )?,
        },
        Action::Deposit => Command::Deposit {
            holder: prompt_holder(console)?,
            amount: prompt_amount(console, DEPOSIT_AMOUNT_PROMPT, AmountRule::Positive)?,
        },
        Action::Withdraw => Command::Withdraw {
            holder: prompt_holder(console)?,
            amount: prompt_amount(console, WITHDRAW_AMOUNT_PROMPT, AmountRule::Positive)?,
        },
        Action::CheckBalance => Command::CheckBalance {
            holder: prompt_holder(console)?,
        },
        Action::Exit => Command::Exit,
    };
    Ok(command)
}

fn prompt_holder<C: Console + ?Sized>(console: &mut C) -> Result<String, PromptError> {
    console.input(HOLDER_PROMPT, None)
}

fn prompt_amount<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    rule: AmountRule,
) -> Result<Decimal, PromptError> {
    let validator = |text: &str| rule.parse(text).map(|_| ()).map_err(|err| err.to_string());
    loop {
        let raw = console.input(prompt, Some(&validator))?;
        match rule.parse(&raw) {
            Ok(amount) => return Ok(amount),
            // Only reachable when a console ignores the validator.
            Err(err) => console.warning(&err.to_string())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn labels_follow_menu_order() {
        assert_eq!(
            Action::labels(),
            ["Create Account", "Deposit", "Withdraw", "Check Balance", "Exit"]
        );
    }

    #[test]
    fn from_label_requires_exact_text() {
        assert_eq!(Action::from_label("Check Balance"), Some(Action::CheckBalance));
        assert_eq!(Action::from_label("check balance"), None);
        assert_eq!(Action::from_label("Transfer"), None);
    }

    #[test]
    fn suggest_finds_near_misses() {
        assert_eq!(Action::suggest("depost"), Some(Action::Deposit));
        assert_eq!(Action::suggest("withdrwa"), Some(Action::Withdraw));
        assert_eq!(Action::suggest("quit everything"), None);
        assert_eq!(Action::suggest("   "), None);
    }

    #[test]
    fn initial_balance_accepts_zero_and_positive() {
        assert_eq!(parse_amount("0", AmountRule::NonNegative), Ok(Decimal::ZERO));
        assert_eq!(parse_amount("-0", AmountRule::NonNegative), Ok(Decimal::ZERO));
        assert_eq!(parse_amount(" 100 ", AmountRule::NonNegative), Ok(dec!(100)));
        assert_eq!(parse_amount("12.34", AmountRule::NonNegative), Ok(dec!(12.34)));
    }

    #[test]
    fn initial_balance_rejects_negative() {
        assert_eq!(
            parse_amount("-1", AmountRule::NonNegative),
            Err(ValidationError::Negative)
        );
    }

    #[test]
    fn amounts_must_be_strictly_positive() {
        assert_eq!(parse_amount("0.01", AmountRule::Positive), Ok(dec!(0.01)));
        assert_eq!(parse_amount("0", AmountRule::Positive), Err(ValidationError::NotPositive));
        assert_eq!(parse_amount("-5", AmountRule::Positive), Err(ValidationError::NotPositive));
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        for input in ["", "abc", "12abc", "NaN", "Infinity", "1,000"] {
            assert!(
                matches!(
                    parse_amount(input, AmountRule::NonNegative),
                    Err(ValidationError::NotANumber(_))
                ),
                "`{input}` should not parse"
            );
        }
    }
}
