use crate::Money;

#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawCommand {
    pub account_number: String,
    pub amount: Money,
}
