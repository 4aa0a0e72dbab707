use crate::ids::AccountNumber;
use crate::models::{AccountKind, Customer};

#[derive(Debug, Clone, PartialEq)]
pub struct OpenAccountCommand {
    pub account_number: AccountNumber,
    pub customer: Customer,
    pub kind: AccountKind,
}
