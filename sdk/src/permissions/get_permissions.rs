use crate::error::GatehouseError;
use crate::models::page::{PageQuery, PageRequest};
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `GetPermissions` command is used to retrieve a single page of permissions.
/// It has additional payload:
/// - `page` - 1-based page number and page size, sent as `skip` and `limit`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetPermissions {
    pub page: PageRequest,
}

impl GetPermissions {
    pub fn new(page: PageRequest) -> Self {
        Self { page }
    }

    pub fn to_query(&self) -> PageQuery {
        PageQuery::from(&self.page)
    }
}

impl Validatable<GatehouseError> for GetPermissions {
    fn validate(&self) -> Result<(), GatehouseError> {
        self.page.validate()
    }
}

impl Display for GetPermissions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.page.current, self.page.page_size)
    }
}
