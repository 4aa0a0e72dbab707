use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Invalid option: {0:?}")]
    InvalidChoice(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateSavings,
    CreateChecking,
    Deposit,
    Withdraw,
    ShowBalance,
    ListAccounts,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::CreateSavings,
        MenuChoice::CreateChecking,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::ShowBalance,
        MenuChoice::ListAccounts,
        MenuChoice::Exit,
    ];

    pub fn parse(raw: &str) -> Result<Self> {
        let choice = match raw.trim().parse::<u8>() {
            Ok(1) => Self::CreateSavings,
            Ok(2) => Self::CreateChecking,
            Ok(3) => Self::Deposit,
            Ok(4) => Self::Withdraw,
            Ok(5) => Self::ShowBalance,
            Ok(6) => Self::ListAccounts,
            Ok(7) => Self::Exit,
            _ => Err(MenuError::InvalidChoice(raw.to_string()))?,
        };

        return Ok(choice);
    }

    pub fn number(&self) -> u8 {
        return match self {
            Self::CreateSavings => 1,
            Self::CreateChecking => 2,
            Self::Deposit => 3,
            Self::Withdraw => 4,
            Self::ShowBalance => 5,
            Self::ListAccounts => 6,
            Self::Exit => 7,
        };
    }

    pub fn label(&self) -> &'static str {
        return match self {
            Self::CreateSavings => "Create savings account",
            Self::CreateChecking => "Create checking account",
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::ShowBalance => "Show balance",
            Self::ListAccounts => "List accounts",
            Self::Exit => "Exit",
        };
    }

    /// Choices that only make sense once at least one account exists
    pub fn needs_accounts(&self) -> bool {
        return matches!(
            self,
            Self::Deposit | Self::Withdraw | Self::ShowBalance | Self::ListAccounts
        );
    }
}
