use crate::error::GatehouseError;
use crate::models::user::UserId;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `DeleteUsers` command is used to delete a batch of users in a single request.
/// It has additional payload:
/// - `ids` - non-empty list of user IDs.
///
/// The backend decides what happens when only some of the users can be deleted,
/// any non-success status is reported as a failure of the whole batch.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteUsers {
    pub ids: Vec<UserId>,
}

impl Validatable<GatehouseError> for DeleteUsers {
    fn validate(&self) -> Result<(), GatehouseError> {
        validate_ids(&self.ids)
    }
}

impl Display for DeleteUsers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", join_ids(&self.ids))
    }
}

pub(crate) fn validate_ids(ids: &[u32]) -> Result<(), GatehouseError> {
    if ids.is_empty() {
        return Err(GatehouseError::EmptyIdentifiers);
    }

    if ids.contains(&0) {
        return Err(GatehouseError::InvalidIdentifier);
    }

    Ok(())
}

pub(crate) fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<String>>()
        .join(",")
}
