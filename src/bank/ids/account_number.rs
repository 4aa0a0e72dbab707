use super::{is_numeric, IdError};

use crate::Result;

use std::{borrow::Borrow, fmt};

/// Digits-only account number, kept as text so leading zeros survive ("001")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn parse(value: &str) -> Result<Self> {
        if !is_numeric(value) {
            Err(IdError::NonNumericAccountNumber(value.to_string()))?
        }

        return Ok(Self(value.to_string()));
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl Borrow<str> for AccountNumber {
    fn borrow(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
