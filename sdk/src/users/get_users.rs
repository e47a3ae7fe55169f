use crate::error::GatehouseError;
use crate::models::page::PageRequest;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `GetUsers` command is used to retrieve a single page of users.
/// It has additional payload:
/// - `page` - 1-based page number and page size, sent as `skip` and `limit`.
/// - `with_groups` - optional flag to expand the groups of every user.
/// - `with_permissions` - optional flag to expand the permissions of every user.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUsers {
    pub page: PageRequest,
    pub with_groups: Option<bool>,
    pub with_permissions: Option<bool>,
}

/// Query string sent with `GET /v1/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetUsersQuery {
    pub skip: u64,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<bool>,
}

impl GetUsers {
    pub fn new(page: PageRequest) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    pub fn to_query(&self) -> GetUsersQuery {
        GetUsersQuery {
            skip: self.page.skip(),
            limit: self.page.limit(),
            groups: self.with_groups,
            permissions: self.with_permissions,
        }
    }
}

impl Validatable<GatehouseError> for GetUsers {
    fn validate(&self) -> Result<(), GatehouseError> {
        self.page.validate()
    }
}

impl Display for GetUsers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.page.current,
            self.page.page_size,
            self.with_groups.unwrap_or_default(),
            self.with_permissions.unwrap_or_default()
        )
    }
}
