use crate::ids::DocumentId;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomerError {
    #[error("Holder name must contain only letters: {0:?}")]
    NonAlphabeticName(String),
}

/// Account holder. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    document_id: DocumentId,
}

impl Customer {
    pub fn new(name: &str, document_id: DocumentId) -> Result<Self> {
        if name.is_empty() || !name.chars().all(char::is_alphabetic) {
            Err(CustomerError::NonAlphabeticName(name.to_string()))?
        }

        return Ok(Self {
            name: name.to_string(),
            document_id,
        });
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn document_id(&self) -> &DocumentId {
        return &self.document_id;
    }
}
