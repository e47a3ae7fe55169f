use crate::error::GatehouseError;
use crate::models::user::UserId;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `ActivateUser` command is used to mark a user as active.
/// It has no request body, the user ID is part of the path. Activating an
/// already active user is a no-op on the backend.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivateUser {
    #[serde(skip)]
    pub user_id: UserId,
}

impl Validatable<GatehouseError> for ActivateUser {
    fn validate(&self) -> Result<(), GatehouseError> {
        if self.user_id == 0 {
            return Err(GatehouseError::InvalidIdentifier);
        }

        Ok(())
    }
}

impl Display for ActivateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_id)
    }
}
