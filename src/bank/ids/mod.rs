mod account_number;
mod document_id;

pub use account_number::AccountNumber;
pub use document_id::DocumentId;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdError {
    #[error("Account number must contain only digits: {0:?}")]
    NonNumericAccountNumber(String),

    #[error("Document id must contain only digits: {0:?}")]
    NonNumericDocumentId(String),
}

fn is_numeric(value: &str) -> bool {
    return !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
}
