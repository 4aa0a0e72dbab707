use crate::Money;

#[derive(Debug, Clone, PartialEq)]
pub struct DepositCommand {
    pub account_number: String,
    pub amount: Money,
}
