use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `GetMe` command is used to retrieve the user owning the current session.
/// It has no additional payload.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetMe {}

impl Display for GetMe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "")
    }
}
