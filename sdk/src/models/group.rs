use crate::utils::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// `GroupId` represents the unique identifier (numeric) of the group.
pub type GroupId = u32;

/// `Group` represents a named set of users sharing permissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}
