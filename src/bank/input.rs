use crate::ids::{AccountNumber, DocumentId};
use crate::models::Customer;
use crate::Money;
use crate::Result;

use thiserror::Error;

/// Raw text collected by the console when opening an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountForm {
    pub holder_name: String,
    pub document: String,
    pub account_number: String,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Invalid amount {0:?}: enter a decimal number such as 150 or 20.75")]
    InvalidAmount(String),

    #[error("Negative amounts are not supported: {0}")]
    NegativeAmount(Money),
}

impl AccountForm {
    /// Validates the form in prompt-independent order: document, account number, then name
    pub fn parse(&self) -> Result<(AccountNumber, Customer)> {
        let document_id = DocumentId::parse(&self.document)?;
        let account_number = AccountNumber::parse(&self.account_number)?;
        let customer = Customer::new(&self.holder_name, document_id)?;

        return Ok((account_number, customer));
    }
}

pub fn parse_amount(raw: &str) -> Result<Money> {
    let amount =
        Money::parse(raw).map_err(|_| InputParseError::InvalidAmount(raw.to_string()))?;

    if amount.is_negative() {
        Err(InputParseError::NegativeAmount(amount))?
    }

    return Ok(amount);
}
