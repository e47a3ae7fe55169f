use crate::error::GatehouseError;
use crate::forms::rules;
use crate::models::user::UserId;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `UpdateUser` command is used to update the mutable fields of a user.
/// It has additional payload:
/// - `user_id` - unique user ID, sent in the path and never in the body.
/// - `password` - new password (optional), if provided, must be between 8 and 20 characters long.
/// - `nickname` - new nickname (optional), if provided, must be between 3 and 20 characters long.
/// - `avatar_uri` - new avatar URL (optional), if provided, must be a valid URL.
///
/// The username is immutable and cannot be part of this command.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(skip)]
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_uri: Option<String>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.nickname.is_none() && self.avatar_uri.is_none()
    }
}

impl Validatable<GatehouseError> for UpdateUser {
    fn validate(&self) -> Result<(), GatehouseError> {
        if self.user_id == 0 {
            return Err(GatehouseError::InvalidIdentifier);
        }

        rules::PASSWORD
            .optional()
            .check(self.password.as_deref())
            .map_err(|_| GatehouseError::InvalidPassword)?;
        rules::NICKNAME
            .optional()
            .check(self.nickname.as_deref())
            .map_err(|_| GatehouseError::InvalidNickname)?;
        rules::AVATAR_URI
            .optional()
            .check(self.avatar_uri.as_deref())
            .map_err(|_| GatehouseError::InvalidAvatarUri)?;
        Ok(())
    }
}

impl Display for UpdateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let password = self.password.as_ref().map_or("", |_| "******");
        let nickname = self.nickname.as_deref().unwrap_or("");
        let avatar_uri = self.avatar_uri.as_deref().unwrap_or("");
        write!(f, "{}|{password}|{nickname}|{avatar_uri}", self.user_id)
    }
}
