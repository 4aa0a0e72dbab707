pub mod basics;
pub mod commands;
pub mod console;
pub mod ids;
pub mod input;
pub mod menu;
pub mod models;
mod money;
mod result;
pub mod services;
pub mod settings;

pub use money::{Money, MoneyError, Rate};
pub use result::Result;

pub use console::Console;
pub use services::AccountRegistry;
pub use settings::Settings;
