mod deposit_command;
mod open_account_command;
mod show_balance_command;
mod withdraw_command;

pub use deposit_command::DepositCommand;
pub use open_account_command::OpenAccountCommand;
pub use show_balance_command::ShowBalanceCommand;
pub use withdraw_command::WithdrawCommand;

/// Typed request built by the console from one menu action
#[derive(Debug, Clone, PartialEq)]
pub enum BankCommand {
    OpenAccount(OpenAccountCommand),
    Deposit(DepositCommand),
    Withdraw(WithdrawCommand),
    ShowBalance(ShowBalanceCommand),
    ListAccounts,
}
