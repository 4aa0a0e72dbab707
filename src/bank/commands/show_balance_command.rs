#[derive(Debug, Clone, PartialEq)]
pub struct ShowBalanceCommand {
    pub account_number: String,
}
