use super::{is_numeric, IdError};

use crate::Result;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn parse(value: &str) -> Result<Self> {
        if !is_numeric(value) {
            Err(IdError::NonNumericDocumentId(value.to_string()))?
        }

        return Ok(Self(value.to_string()));
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
