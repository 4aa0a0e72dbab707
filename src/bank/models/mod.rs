mod account;
mod account_summary;
mod customer;

pub use account::{
    Account, AccountError, AccountKind, DEFAULT_INTEREST_RATE, DEFAULT_OVERDRAFT_LIMIT,
};
pub use account_summary::AccountSummary;
pub use customer::{Customer, CustomerError};
