mod args;
mod config;

use bank::{AccountRegistry, Console, Result};

use std::io;

fn main() -> Result {
    config::configure_app()?;

    let settings = args::parse_settings()?;
    log::debug!("Application configured with {settings:?}. Starting menu...");

    let mut registry = AccountRegistry::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    console.run(&mut registry, &settings)?;

    log::debug!("Session finished with {} accounts", registry.len());

    Ok(())
}
