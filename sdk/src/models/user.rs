use crate::models::group::Group;
use crate::models::permission::Permission;
use crate::models::user_status::UserStatus;
use crate::utils::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// `UserId` represents the unique identifier (numeric) of the user.
pub type UserId = u32;

/// `User` represents a console account as returned by the backend.
/// It consists of the following fields:
/// - `id`: the unique identifier (numeric) of the user, assigned by the backend.
/// - `username`: the unique login handle.
/// - `nickname`: the display name.
/// - `avatar_uri`: the URL of the avatar image.
/// - `is_active`: whether the user is active.
/// - `permissions`: the permissions of the user, only when requested.
/// - `groups`: the groups of the user, only when requested.
/// - `created_at`: the timestamp when the user was created.
/// - `updated_at`: the timestamp of the last change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The unique identifier (numeric) of the user.
    pub id: UserId,
    /// The unique login handle.
    pub username: String,
    /// The display name.
    pub nickname: String,
    /// The URL of the avatar image.
    pub avatar_uri: String,
    /// Whether the user is active. Older backends name this field `verified`.
    #[serde(alias = "verified")]
    pub is_active: bool,
    /// The permissions of the user, present only when the list was expanded with permissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,
    /// The groups of the user, present only when the list was expanded with groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    /// The timestamp when the user was created.
    pub created_at: Timestamp,
    /// The timestamp of the last change.
    pub updated_at: Timestamp,
}

impl User {
    pub fn status(&self) -> UserStatus {
        UserStatus::from(self.is_active)
    }
}
