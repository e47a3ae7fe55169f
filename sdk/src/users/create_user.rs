use crate::error::GatehouseError;
use crate::forms::rules;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `CreateUser` command is used to create a new user.
/// It has additional payload:
/// - `username` - unique name of the user, must be between 3 and 20 characters long.
/// - `nickname` - display name of the user, must be between 3 and 20 characters long.
/// - `password` - password of the user, must be between 8 and 20 characters long.
/// - `avatar_uri` - URL of the avatar image, must be between 3 and 20 characters long.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub nickname: String,
    pub password: String,
    pub avatar_uri: String,
}

impl Validatable<GatehouseError> for CreateUser {
    fn validate(&self) -> Result<(), GatehouseError> {
        rules::USERNAME
            .check(Some(&self.username))
            .map_err(|_| GatehouseError::InvalidUsername)?;
        rules::NICKNAME
            .check(Some(&self.nickname))
            .map_err(|_| GatehouseError::InvalidNickname)?;
        rules::PASSWORD
            .check(Some(&self.password))
            .map_err(|_| GatehouseError::InvalidPassword)?;
        rules::AVATAR_URI
            .check(Some(&self.avatar_uri))
            .map_err(|_| GatehouseError::InvalidAvatarUri)?;
        Ok(())
    }
}

impl Display for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|******|{}",
            self.username, self.nickname, self.avatar_uri
        )
    }
}
