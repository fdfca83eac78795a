use rust_decimal::Decimal;

use super::account::Account;

/// In-memory registry of accounts, kept in creation order.
///
/// Holder names are not required to be unique; lookups resolve to the
/// earliest account created under a name.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new account and returns a reference to it.
    pub fn create_account(
        &mut self,
        holder: impl Into<String>,
        initial_balance: Decimal,
    ) -> &Account {
        let account = Account::with_balance(holder, initial_balance);
        tracing::debug!(
            account = %account.id(),
            holder = account.holder(),
            balance = %initial_balance,
            "account created"
        );
        self.accounts.push(account);
        &self.accounts[self.accounts.len() - 1]
    }

    pub fn find_account(&self, holder: &str) -> Option<&Account> {
        let found = self
            .accounts
            .iter()
            .find(|account| account.holder() == holder);
        if found.is_none() {
            tracing::debug!(holder, "account lookup missed");
        }
        found
    }

    pub fn find_account_mut(&mut self, holder: &str) -> Option<&mut Account> {
        let found = self
            .accounts
            .iter_mut()
            .find(|account| account.holder() == holder);
        if found.is_none() {
            tracing::debug!(holder, "account lookup missed");
        }
        found
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
