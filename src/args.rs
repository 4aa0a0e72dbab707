use bank::{Result, Settings};

use std::env;

/// Reads the optional `--interest-rate` and `--overdraft-limit` flags
pub fn parse_settings() -> Result<Settings> {
    return Settings::from_args(env::args().skip(1));
}
