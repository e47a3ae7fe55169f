use crate::error::GatehouseError;
use crate::forms::rules;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `CreateGroup` command is used to create a new group.
/// It has additional payload:
/// - `name` - unique name of the group, must be between 3 and 256 characters long.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGroup {
    pub name: String,
}

impl Validatable<GatehouseError> for CreateGroup {
    fn validate(&self) -> Result<(), GatehouseError> {
        rules::GROUP_NAME
            .check(Some(&self.name))
            .map_err(|_| GatehouseError::InvalidResourceName)
    }
}

impl Display for CreateGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
