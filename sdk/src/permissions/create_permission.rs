use crate::error::GatehouseError;
use crate::forms::rules;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `CreatePermission` command is used to create a new permission.
/// It has additional payload:
/// - `name` - unique name of the permission, must be between 3 and 256 characters long.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePermission {
    pub name: String,
}

impl Validatable<GatehouseError> for CreatePermission {
    fn validate(&self) -> Result<(), GatehouseError> {
        rules::PERMISSION_NAME
            .check(Some(&self.name))
            .map_err(|_| GatehouseError::InvalidResourceName)
    }
}

impl Display for CreatePermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_should_be_between_3_and_256_characters() {
        assert!(CreatePermission {
            name: "users.read".to_string()
        }
        .validate()
        .is_ok());
        assert!(CreatePermission {
            name: "rw".to_string()
        }
        .validate()
        .is_err());
        assert!(CreatePermission {
            name: "x".repeat(257)
        }
        .validate()
        .is_err());
    }
}
