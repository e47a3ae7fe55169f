use crate::utils::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// `PermissionId` represents the unique identifier (numeric) of the permission.
pub type PermissionId = u32;

/// `Permission` represents a named capability that can be granted to groups and users.
/// It consists of the following fields:
/// - `id`: the unique identifier (numeric) of the permission.
/// - `name`: the unique name of the permission.
/// - `created_at`: the timestamp when the permission was created.
/// - `updated_at`: the timestamp of the last change.
///
/// Timestamps are optional because permissions embedded in a user only carry `id` and `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    /// The unique identifier (numeric) of the permission.
    pub id: PermissionId,
    /// The unique name of the permission.
    pub name: String,
    /// The timestamp when the permission was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// The timestamp of the last change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}
