use crate::commands::{
    BankCommand, DepositCommand, OpenAccountCommand, ShowBalanceCommand, WithdrawCommand,
};
use crate::input::{parse_amount, AccountForm};
use crate::menu::MenuChoice;
use crate::models::AccountKind;
use crate::services::{AccountRegistry, CommandService, NO_ACCOUNTS_MESSAGE};
use crate::settings::Settings;
use crate::Result;

use std::io::{BufRead, Write};

const MENU_TITLE: &str = "=== BANK ===";

/// Outcome of collecting the fields for one menu action
enum Collected {
    Command(BankCommand),
    Rejected(anyhow::Error),
    Closed,
}

/// Line-oriented menu session over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        return Self { input, output };
    }

    pub fn into_output(self) -> W {
        return self.output;
    }

    /// Runs the menu until the user picks exit or the input ends. Only I/O failures are returned
    /// as errors; everything else is reported to the user and the menu is shown again.
    pub fn run(&mut self, registry: &mut AccountRegistry, settings: &Settings) -> Result {
        loop {
            self.print_menu()?;

            let raw = match self.prompt("Select an option: ")? {
                Some(raw) => raw,
                None => break,
            };

            let choice = match MenuChoice::parse(&raw) {
                Ok(choice) => choice,
                Err(e) => {
                    log::debug!("{e}");
                    self.say("Invalid option.")?;
                    continue;
                }
            };

            log::debug!("Menu choice: {choice:?}");

            if choice == MenuChoice::Exit {
                self.say("Exiting...")?;
                return Ok(());
            }

            if choice.needs_accounts() && registry.is_empty() {
                self.say(NO_ACCOUNTS_MESSAGE)?;
                continue;
            }

            let command = match self.collect(choice, settings)? {
                Collected::Command(command) => command,
                Collected::Rejected(e) => {
                    log::debug!("Rejected input: {e}");
                    self.say(&e.to_string())?;
                    continue;
                }
                Collected::Closed => break,
            };

            match CommandService::new(registry).process_command(command) {
                Ok(message) => self.say(&message)?,
                Err(e) => {
                    log::debug!("Command failed: {e}");
                    self.say(&e.to_string())?;
                }
            }
        }

        log::debug!("Input closed, leaving menu loop");

        return Ok(());
    }

    fn collect(&mut self, choice: MenuChoice, settings: &Settings) -> Result<Collected> {
        let collected = match choice {
            MenuChoice::CreateSavings => self.collect_open_account(settings.savings_kind())?,
            MenuChoice::CreateChecking => self.collect_open_account(settings.checking_kind())?,
            MenuChoice::Deposit => self.collect_transfer(choice)?,
            MenuChoice::Withdraw => self.collect_transfer(choice)?,
            MenuChoice::ShowBalance => {
                let Some(account_number) = self.prompt("Account number: ")? else {
                    return Ok(Collected::Closed);
                };

                Collected::Command(BankCommand::ShowBalance(ShowBalanceCommand {
                    account_number,
                }))
            }
            MenuChoice::ListAccounts => Collected::Command(BankCommand::ListAccounts),
            MenuChoice::Exit => Collected::Closed,
        };

        return Ok(collected);
    }

    fn collect_open_account(&mut self, kind: AccountKind) -> Result<Collected> {
        let Some(holder_name) = self.prompt("Holder name: ")? else {
            return Ok(Collected::Closed);
        };
        let Some(document) = self.prompt("Holder document: ")? else {
            return Ok(Collected::Closed);
        };
        let Some(account_number) = self.prompt("Account number: ")? else {
            return Ok(Collected::Closed);
        };

        let form = AccountForm {
            holder_name,
            document,
            account_number,
        };

        let (account_number, customer) = match form.parse() {
            Ok(parsed) => parsed,
            Err(e) => return Ok(Collected::Rejected(e)),
        };

        return Ok(Collected::Command(BankCommand::OpenAccount(
            OpenAccountCommand {
                account_number,
                customer,
                kind,
            },
        )));
    }

    /// Deposit and withdraw ask for the amount first, then the account
    fn collect_transfer(&mut self, choice: MenuChoice) -> Result<Collected> {
        let Some(raw_amount) = self.prompt("Amount: ")? else {
            return Ok(Collected::Closed);
        };

        let amount = match parse_amount(&raw_amount) {
            Ok(amount) => amount,
            Err(e) => return Ok(Collected::Rejected(e)),
        };

        let Some(account_number) = self.prompt("Account number: ")? else {
            return Ok(Collected::Closed);
        };

        let command = if choice == MenuChoice::Deposit {
            BankCommand::Deposit(DepositCommand {
                account_number,
                amount,
            })
        } else {
            BankCommand::Withdraw(WithdrawCommand {
                account_number,
                amount,
            })
        };

        return Ok(Collected::Command(command));
    }

    fn print_menu(&mut self) -> Result {
        writeln!(self.output)?;
        writeln!(self.output, "{MENU_TITLE}")?;

        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }

        return Ok(());
    }

    /// Writes `label` and reads one line, or `None` once the input is exhausted
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        return Ok(Some(line.trim().to_string()));
    }

    fn say(&mut self, message: &str) -> Result {
        writeln!(self.output, "{message}")?;

        return Ok(());
    }
}
