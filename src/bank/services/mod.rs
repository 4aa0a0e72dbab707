mod account_registry;
mod command_service;

pub use account_registry::{AccountDataStore, AccountRegistry, AccountRegistryError};
pub use command_service::{CommandService, NO_ACCOUNTS_MESSAGE};
