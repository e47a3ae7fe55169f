use crate::error::GatehouseError;
use crate::utils::text;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `LoginUser` command is used to log in a user by username and password.
/// It has additional payload:
/// - `username` - username, cannot be blank.
/// - `password` - password, cannot be blank.
///
/// On success the backend replies with an opaque session token.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginUser {
    pub username: String,
    pub password: String,
}

impl Validatable<GatehouseError> for LoginUser {
    fn validate(&self) -> Result<(), GatehouseError> {
        if text::is_blank(&self.username) {
            return Err(GatehouseError::InvalidUsername);
        }

        if self.password.is_empty() {
            return Err(GatehouseError::InvalidPassword);
        }

        Ok(())
    }
}

impl Display for LoginUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|******", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_should_fail_validation() {
        let command = LoginUser {
            username: " ".to_string(),
            password: "secret".to_string(),
        };
        assert!(matches!(
            command.validate(),
            Err(GatehouseError::InvalidUsername)
        ));

        let command = LoginUser {
            username: "admin".to_string(),
            password: String::new(),
        };
        assert!(matches!(
            command.validate(),
            Err(GatehouseError::InvalidPassword)
        ));
    }
}
