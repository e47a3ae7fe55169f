pub mod args;
#[cfg(feature = "gatehouse-cli")]
pub mod cli;
pub mod cli_command;
pub mod client;
pub mod console;
pub mod error;
pub mod forms;
pub mod groups;
pub mod http;
pub mod models;
pub mod permissions;
pub mod users;
pub mod utils;
pub mod validatable;
