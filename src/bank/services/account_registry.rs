use crate::ids::AccountNumber;
use crate::models::{Account, AccountSummary};
use crate::{Money, Result};

use std::collections::BTreeMap;

use thiserror::Error;

pub type AccountDataStore = BTreeMap<AccountNumber, Account>;

#[derive(Error, Debug)]
pub enum AccountRegistryError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

/// In-memory accounts keyed by account number, alive for the whole session
#[derive(Debug, Default)]
pub struct AccountRegistry {
    repository: AccountDataStore,
}

impl AccountRegistry {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Stores the account, handing back any account it replaced under the same number
    pub fn open(&mut self, account: Account) -> Option<Account> {
        let number = account.number().clone();

        return self.repository.insert(number, account);
    }

    pub fn find(&self, account_number: &str) -> Option<&Account> {
        return self.repository.get(account_number);
    }

    pub fn find_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        return self.repository.get_mut(account_number);
    }

    pub fn deposit(&mut self, account_number: &str, amount: &Money) -> Result {
        let account = self.find_existing_mut(account_number)?;

        account.deposit(amount)?;

        return Ok(());
    }

    pub fn withdraw(&mut self, account_number: &str, amount: &Money) -> Result {
        let account = self.find_existing_mut(account_number)?;

        account.withdraw(amount)?;

        return Ok(());
    }

    pub fn apply_interest(&mut self, account_number: &str) -> Result {
        let account = self.find_existing_mut(account_number)?;

        account.apply_interest()?;

        return Ok(());
    }

    pub fn display_balance(&self, account_number: &str) -> Result<String> {
        let account = self
            .find(account_number)
            .ok_or_else(|| AccountRegistryError::AccountNotFound(account_number.to_string()))?;

        return Ok(account.display_balance());
    }

    /// Summaries in ascending account number order
    pub fn summaries(&self) -> Vec<AccountSummary> {
        return self.repository.values().map(Account::summary).collect();
    }

    pub fn len(&self) -> usize {
        return self.repository.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.repository.is_empty();
    }

    fn find_existing_mut(&mut self, account_number: &str) -> Result<&mut Account> {
        let account = self
            .find_mut(account_number)
            .ok_or_else(|| AccountRegistryError::AccountNotFound(account_number.to_string()))?;

        return Ok(account);
    }
}
