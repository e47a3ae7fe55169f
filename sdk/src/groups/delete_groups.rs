use crate::error::GatehouseError;
use crate::models::group::GroupId;
use crate::users::delete_users::{join_ids, validate_ids};
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `DeleteGroups` command is used to delete a batch of groups in a single request.
/// It has additional payload:
/// - `ids` - non-empty list of group IDs.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteGroups {
    pub ids: Vec<GroupId>,
}

impl Validatable<GatehouseError> for DeleteGroups {
    fn validate(&self) -> Result<(), GatehouseError> {
        validate_ids(&self.ids)
    }
}

impl Display for DeleteGroups {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", join_ids(&self.ids))
    }
}
