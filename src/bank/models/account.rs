use super::{AccountSummary, Customer};

use crate::ids::AccountNumber;
use crate::{Money, Rate, Result};

use thiserror::Error;

pub const DEFAULT_INTEREST_RATE: Rate = Rate(200);
pub const DEFAULT_OVERDRAFT_LIMIT: Money = Money::from_whole(500);

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Insufficient funds: account {0} has {1}, cannot withdraw {2}")]
    InsufficientFunds(AccountNumber, Money, Money),

    #[error("Overdraft limit exceeded: account {0} has {1} with a limit of {2}, cannot withdraw {3}")]
    OverdraftLimitExceeded(AccountNumber, Money, Money, Money),

    #[error("Interest can only be applied to savings accounts, {0} is a checking account")]
    InterestOnChecking(AccountNumber),
}

/// Variant data deciding how far a withdrawal may take the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Savings { interest_rate: Rate },
    Checking { overdraft_limit: Money },
}

impl AccountKind {
    pub fn savings() -> Self {
        return Self::Savings {
            interest_rate: DEFAULT_INTEREST_RATE,
        };
    }

    pub fn checking() -> Self {
        return Self::Checking {
            overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
        };
    }

    pub fn label(&self) -> &'static str {
        return match self {
            Self::Savings { .. } => "Savings",
            Self::Checking { .. } => "Checking",
        };
    }

    /// Lowest balance a withdrawal is allowed to leave behind
    fn floor(&self) -> Result<Money> {
        let mut floor = Money::ZERO;

        if let Self::Checking { overdraft_limit } = self {
            floor.sub(overdraft_limit)?;
        }

        return Ok(floor);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    owner: Customer,
    balance: Money,
    kind: AccountKind,
}

impl Account {
    pub fn new(number: AccountNumber, owner: Customer, kind: AccountKind) -> Self {
        return Self {
            number,
            owner,
            balance: Money::ZERO,
            kind,
        };
    }

    pub fn number(&self) -> &AccountNumber {
        return &self.number;
    }

    pub fn owner(&self) -> &Customer {
        return &self.owner;
    }

    pub fn balance(&self) -> Money {
        return self.balance;
    }

    pub fn kind(&self) -> &AccountKind {
        return &self.kind;
    }

    /// Amounts are not checked for sign; the only failure is overflow
    pub fn deposit(&mut self, amount: &Money) -> Result {
        self.balance.add(amount)?;

        log::debug!("Deposited {amount} into {}: balance {}", self.number, self.balance);

        return Ok(());
    }

    /// Withdraws `amount` if the account kind allows it. A rejected withdrawal leaves the
    /// balance untouched.
    pub fn withdraw(&mut self, amount: &Money) -> Result {
        let mut remaining = self.balance;
        remaining.sub(amount)?;

        if remaining < self.kind.floor()? {
            match self.kind {
                AccountKind::Savings { .. } => Err(AccountError::InsufficientFunds(
                    self.number.clone(),
                    self.balance,
                    *amount,
                ))?,
                AccountKind::Checking { overdraft_limit } => {
                    Err(AccountError::OverdraftLimitExceeded(
                        self.number.clone(),
                        self.balance,
                        overdraft_limit,
                        *amount,
                    ))?
                }
            }
        }

        self.balance = remaining;

        log::debug!("Withdrew {amount} from {}: balance {}", self.number, self.balance);

        return Ok(());
    }

    /// Adds `balance * interest_rate` to a savings account
    pub fn apply_interest(&mut self) -> Result {
        let interest_rate = match self.kind {
            AccountKind::Savings { interest_rate } => interest_rate,
            AccountKind::Checking { .. } => {
                Err(AccountError::InterestOnChecking(self.number.clone()))?
            }
        };

        let interest = self.balance.apply_rate(&interest_rate)?;
        self.balance.add(&interest)?;

        return Ok(());
    }

    pub fn display_balance(&self) -> String {
        return format!("Account {} - Balance: {}", self.number, self.balance);
    }

    pub fn summary(&self) -> AccountSummary {
        return AccountSummary {
            holder: self.owner.name().to_string(),
            document: self.owner.document_id().to_string(),
            balance: self.display_balance(),
            kind: self.kind.label(),
        };
    }
}
