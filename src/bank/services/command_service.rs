use super::AccountRegistry;

use crate::commands::{
    BankCommand, DepositCommand, OpenAccountCommand, ShowBalanceCommand, WithdrawCommand,
};
use crate::models::Account;
use crate::Result;

pub const NO_ACCOUNTS_MESSAGE: &str = "No accounts yet, create an account first.";

const LIST_HEADER: &str = "--- Available accounts ---";
const LIST_SEPARATOR: &str = "--------------------------";

/// Applies console commands to a borrowed registry, producing the status line to show the user
pub struct CommandService<'r> {
    registry: &'r mut AccountRegistry,
}

impl<'r> CommandService<'r> {
    pub fn new(registry: &'r mut AccountRegistry) -> Self {
        return Self { registry };
    }

    pub fn process_command(&mut self, command: BankCommand) -> Result<String> {
        log::debug!("Processing command: {command:?}");

        let message = match command {
            BankCommand::OpenAccount(command) => self.process_open_account(command),

            BankCommand::Deposit(command) => self.process_deposit(command)?,

            BankCommand::Withdraw(command) => self.process_withdraw(command)?,

            BankCommand::ShowBalance(command) => self.process_show_balance(command)?,

            BankCommand::ListAccounts => self.process_list_accounts(),
        };

        return Ok(message);
    }

    fn process_open_account(&mut self, command: OpenAccountCommand) -> String {
        let label = command.kind.label();
        let account = Account::new(command.account_number, command.customer, command.kind);

        if let Some(replaced) = self.registry.open(account) {
            log::warn!(
                "Account {} was replaced, previous balance {} dropped",
                replaced.number(),
                replaced.balance()
            );
        }

        return format!("{label} account created.");
    }

    fn process_deposit(&mut self, command: DepositCommand) -> Result<String> {
        self.registry
            .deposit(&command.account_number, &command.amount)?;

        return Ok("Deposit successful.".to_string());
    }

    fn process_withdraw(&mut self, command: WithdrawCommand) -> Result<String> {
        self.registry
            .withdraw(&command.account_number, &command.amount)?;

        return Ok("Withdrawal successful.".to_string());
    }

    fn process_show_balance(&self, command: ShowBalanceCommand) -> Result<String> {
        return self.registry.display_balance(&command.account_number);
    }

    fn process_list_accounts(&self) -> String {
        if self.registry.is_empty() {
            return NO_ACCOUNTS_MESSAGE.to_string();
        }

        let mut lines = vec![LIST_HEADER.to_string()];

        for summary in self.registry.summaries() {
            lines.push(summary.to_string());
            lines.push(LIST_SEPARATOR.to_string());
        }

        return lines.join("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::{AccountNumber, DocumentId};
    use crate::models::{AccountError, AccountKind, Customer};
    use crate::services::AccountRegistryError;
    use crate::Money;

    fn open_command(number: &str, name: &str, kind: AccountKind) -> BankCommand {
        BankCommand::OpenAccount(OpenAccountCommand {
            account_number: AccountNumber::parse(number).unwrap(),
            customer: Customer::new(name, DocumentId::parse("77").unwrap()).unwrap(),
            kind,
        })
    }

    fn deposit_command(number: &str, amount: &str) -> BankCommand {
        BankCommand::Deposit(DepositCommand {
            account_number: number.to_string(),
            amount: Money::parse(amount).unwrap(),
        })
    }

    fn withdraw_command(number: &str, amount: &str) -> BankCommand {
        BankCommand::Withdraw(WithdrawCommand {
            account_number: number.to_string(),
            amount: Money::parse(amount).unwrap(),
        })
    }

    fn show_balance_command(number: &str) -> BankCommand {
        BankCommand::ShowBalance(ShowBalanceCommand {
            account_number: number.to_string(),
        })
    }

    #[test]
    fn savings_session() {
        let mut registry = AccountRegistry::new();
        let mut service = CommandService::new(&mut registry);

        assert_eq!(
            service
                .process_command(open_command("001", "Ana", AccountKind::savings()))
                .unwrap(),
            "Savings account created."
        );
        assert_eq!(
            service.process_command(deposit_command("001", "500")).unwrap(),
            "Deposit successful."
        );
        assert_eq!(
            service.process_command(withdraw_command("001", "200")).unwrap(),
            "Withdrawal successful."
        );

        let err = service
            .process_command(withdraw_command("001", "1000"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AccountError>(),
            Some(AccountError::InsufficientFunds(..))
        ));

        assert_eq!(
            service.process_command(show_balance_command("001")).unwrap(),
            "Account 001 - Balance: 300.0"
        );
    }

    #[test]
    fn checking_session() {
        let mut registry = AccountRegistry::new();
        let mut service = CommandService::new(&mut registry);

        assert_eq!(
            service
                .process_command(open_command("002", "Leo", AccountKind::checking()))
                .unwrap(),
            "Checking account created."
        );

        service
            .process_command(withdraw_command("002", "300"))
            .unwrap();

        let err = service
            .process_command(withdraw_command("002", "300"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AccountError>(),
            Some(AccountError::OverdraftLimitExceeded(..))
        ));

        assert_eq!(registry.find("002").unwrap().balance(), Money::from_whole(-300));
    }

    #[test]
    fn unknown_account() {
        let mut registry = AccountRegistry::new();
        let mut service = CommandService::new(&mut registry);

        service
            .process_command(open_command("001", "Ana", AccountKind::savings()))
            .unwrap();

        for command in [
            deposit_command("404", "1"),
            withdraw_command("404", "1"),
            show_balance_command("404"),
        ] {
            let err = service.process_command(command).unwrap_err();

            assert!(matches!(
                err.downcast_ref::<AccountRegistryError>(),
                Some(AccountRegistryError::AccountNotFound(_))
            ));
        }
    }

    #[test]
    fn list_accounts() {
        let mut registry = AccountRegistry::new();
        let mut service = CommandService::new(&mut registry);

        assert_eq!(
            service.process_command(BankCommand::ListAccounts).unwrap(),
            NO_ACCOUNTS_MESSAGE
        );

        service
            .process_command(open_command("002", "Leo", AccountKind::checking()))
            .unwrap();
        service
            .process_command(open_command("001", "Ana", AccountKind::savings()))
            .unwrap();

        let expected = [
            LIST_HEADER,
            "Holder: Ana",
            "Document: 77",
            "Account 001 - Balance: 0.0",
            "Account type: Savings",
            LIST_SEPARATOR,
            "Holder: Leo",
            "Document: 77",
            "Account 002 - Balance: 0.0",
            "Account type: Checking",
            LIST_SEPARATOR,
        ]
        .join("\n");

        assert_eq!(
            service.process_command(BankCommand::ListAccounts).unwrap(),
            expected
        );
    }
}
