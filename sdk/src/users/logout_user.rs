use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `LogoutUser` command is used to log out the authenticated user.
/// It has no additional payload.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogoutUser {}

impl Display for LogoutUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "")
    }
}
