pub mod config;
pub mod groups;
pub mod output;
pub mod permissions;
pub mod system;
pub mod users;
