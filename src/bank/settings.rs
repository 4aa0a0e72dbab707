use crate::models::{AccountKind, DEFAULT_INTEREST_RATE, DEFAULT_OVERDRAFT_LIMIT};
use crate::{Money, Rate, Result};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Missing value for {0}")]
    MissingValue(&'static str),

    #[error("Couldn't parse value for {0}: {1:?}")]
    InvalidValue(&'static str, String),

    #[error("Overdraft limit cannot be negative: {0}")]
    NegativeOverdraftLimit(Money),
}

/// Parameters applied to every account opened during the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub interest_rate: Rate,
    pub overdraft_limit: Money,
}

impl Default for Settings {
    fn default() -> Self {
        return Self {
            interest_rate: DEFAULT_INTEREST_RATE,
            overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
        };
    }
}

impl Settings {
    /// Builds settings from command-line arguments, excluding the program name.
    ///
    /// Accepts `--interest-rate <rate>` and `--overdraft-limit <amount>`; anything else is an
    /// error.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut settings = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--interest-rate" => {
                    let value = args
                        .next()
                        .ok_or(SettingsError::MissingValue("--interest-rate"))?;

                    settings.interest_rate = Rate::parse(&value).with_context(|| {
                        SettingsError::InvalidValue("--interest-rate", value.clone())
                    })?;
                }
                "--overdraft-limit" => {
                    let value = args
                        .next()
                        .ok_or(SettingsError::MissingValue("--overdraft-limit"))?;

                    let limit = Money::parse(&value).with_context(|| {
                        SettingsError::InvalidValue("--overdraft-limit", value.clone())
                    })?;

                    if limit.is_negative() {
                        Err(SettingsError::NegativeOverdraftLimit(limit))?
                    }

                    settings.overdraft_limit = limit;
                }
                _ => Err(SettingsError::UnknownArgument(arg))?,
            }
        }

        log::debug!("Resolved settings: {settings:?}");

        return Ok(settings);
    }

    pub fn savings_kind(&self) -> AccountKind {
        return AccountKind::Savings {
            interest_rate: self.interest_rate,
        };
    }

    pub fn checking_kind(&self) -> AccountKind {
        return AccountKind::Checking {
            overdraft_limit: self.overdraft_limit,
        };
    }
}
