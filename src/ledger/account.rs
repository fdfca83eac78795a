use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::AccountError;

/// A named balance held in the in-memory ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: Uuid,
    holder: String,
    balance: Decimal,
}

impl Account {
    /// Creates a new account with a zero balance.
    pub fn new(holder: impl Into<String>) -> Self {
        Self::with_balance(holder, Decimal::ZERO)
    }

    pub fn with_balance(holder: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            holder: holder.into(),
            balance,
        }
    }

    /// Internal identifier used to correlate log records.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds `amount` and returns the new balance.
    ///
    /// The sign of the amount is not checked here; the prompt layer only lets
    /// positive values through. A sum beyond the decimal range leaves the
    /// balance untouched.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        let Some(balance) = self.balance.checked_add(amount) else {
            tracing::debug!(
                account = %self.id,
                %amount,
                balance = %self.balance,
                "deposit overflowed"
            );
            return Err(AccountError::BalanceOverflow {
                amount,
                balance: self.balance,
            });
        };
        self.balance = balance;
        tracing::debug!(
            account = %self.id,
            %amount,
            balance = %self.balance,
            "deposit applied"
        );
        Ok(self.balance)
    }

    /// Subtracts `amount` and returns the new balance, or leaves the balance
    /// untouched when it does not cover the request.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        if amount > self.balance {
            tracing::debug!(
                account = %self.id,
                %amount,
                balance = %self.balance,
                "withdrawal rejected"
            );
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        tracing::debug!(
            account = %self.id,
            %amount,
            balance = %self.balance,
            "withdrawal applied"
        );
        Ok(self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_account_starts_empty() {
        let account = Account::new("Alice");
        assert_eq!(account.holder(), "Alice");
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn deposits_accumulate() {
        let mut account = Account::with_balance("Alice", dec!(100));
        let deposits = [dec!(50), dec!(0.25), dec!(12.75), dec!(1000)];
        for amount in deposits {
            account.deposit(amount).unwrap();
        }
        assert_eq!(account.balance(), dec!(1163));
    }

    #[test]
    fn withdraw_more_than_balance_is_rejected() {
        let mut account = Account::with_balance("Alice", dec!(150));
        let err = account.withdraw(dec!(200)).unwrap_err();
        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                requested: dec!(200),
                available: dec!(150),
            }
        );
        assert_eq!(account.balance(), dec!(150));
    }

    #[test]
    fn withdraw_full_balance_empties_account() {
        let mut account = Account::with_balance("Alice", dec!(150));
        assert_eq!(account.withdraw(dec!(150)).unwrap(), Decimal::ZERO);
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn withdraw_within_balance_subtracts() {
        let mut account = Account::with_balance("Alice", dec!(10));
        assert_eq!(account.withdraw(dec!(3.5)).unwrap(), dec!(6.5));
    }

    #[test]
    fn smallest_unit_deposit_is_exact() {
        let mut account = Account::new("Carol");
        assert_eq!(account.deposit(dec!(0.01)).unwrap(), dec!(0.01));
    }

    #[test]
    fn deposit_past_decimal_range_is_rejected() {
        let mut account = Account::with_balance("Max", Decimal::MAX);
        let err = account.deposit(dec!(1)).unwrap_err();
        assert_eq!(
            err,
            AccountError::BalanceOverflow {
                amount: dec!(1),
                balance: Decimal::MAX,
            }
        );
        assert_eq!(account.balance(), Decimal::MAX);
    }
}
