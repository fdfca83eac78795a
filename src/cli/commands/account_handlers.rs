use rust_decimal::Decimal;

use crate::ledger::Ledger;

use super::Outcome;

pub fn handle_create(ledger: &mut Ledger, holder: String, initial_balance: Decimal) -> Outcome {
    ledger.create_account(holder.as_str(), initial_balance);
    Outcome::AccountCreated {
        holder,
        initial_balance,
    }
}

pub fn handle_deposit(ledger: &mut Ledger, holder: String, amount: Decimal) -> Outcome {
    let Some(account) = ledger.find_account_mut(&holder) else {
        return Outcome::NotFound { holder };
    };
    match account.deposit(amount) {
        Ok(balance) => Outcome::Deposited { amount, balance },
        Err(err) => err.into(),
    }
}

pub fn handle_withdraw(ledger: &mut Ledger, holder: String, amount: Decimal) -> Outcome {
    let Some(account) = ledger.find_account_mut(&holder) else {
        return Outcome::NotFound { holder };
    };
    match account.withdraw(amount) {
        Ok(balance) => Outcome::Withdrew { amount, balance },
        Err(err) => err.into(),
    }
}

pub fn handle_balance(ledger: &Ledger, holder: String) -> Outcome {
    match ledger.find_account(&holder) {
        Some(account) => Outcome::Balance {
            balance: account.balance(),
            holder,
        },
        None => Outcome::NotFound { holder },
    }
}
