use crate::error::GatehouseError;
use crate::models::permission::PermissionId;
use crate::users::delete_users::{join_ids, validate_ids};
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `DeletePermissions` command is used to delete a batch of permissions in a single request.
/// It has additional payload:
/// - `ids` - non-empty list of permission IDs.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletePermissions {
    pub ids: Vec<PermissionId>,
}

impl Validatable<GatehouseError> for DeletePermissions {
    fn validate(&self) -> Result<(), GatehouseError> {
        validate_ids(&self.ids)
    }
}

impl Display for DeletePermissions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", join_ids(&self.ids))
    }
}
