use crate::error::GatehouseError;
use crate::models::user::UserId;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `DeactivateUser` command is used to mark a user as inactive.
/// It has no request body, the user ID is part of the path.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeactivateUser {
    #[serde(skip)]
    pub user_id: UserId,
}

impl Validatable<GatehouseError> for DeactivateUser {
    fn validate(&self) -> Result<(), GatehouseError> {
        if self.user_id == 0 {
            return Err(GatehouseError::InvalidIdentifier);
        }

        Ok(())
    }
}

impl Display for DeactivateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_id_should_fail_validation() {
        assert!(DeactivateUser { user_id: 0 }.validate().is_err());
        assert!(DeactivateUser { user_id: 3 }.validate().is_ok());
    }
}
