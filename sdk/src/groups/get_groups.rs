use crate::error::GatehouseError;
use crate::models::page::{PageQuery, PageRequest};
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `GetGroups` command is used to retrieve a single page of groups.
/// It has additional payload:
/// - `page` - 1-based page number and page size, sent as `skip` and `limit`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetGroups {
    pub page: PageRequest,
}

impl GetGroups {
    pub fn new(page: PageRequest) -> Self {
        Self { page }
    }

    pub fn to_query(&self) -> PageQuery {
        PageQuery::from(&self.page)
    }
}

impl Validatable<GatehouseError> for GetGroups {
    fn validate(&self) -> Result<(), GatehouseError> {
        self.page.validate()
    }
}

impl Display for GetGroups {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.page.current, self.page.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_should_translate_page_to_offset_and_limit() {
        let query = GetGroups::new(PageRequest::new(2, 25)).to_query();
        assert_eq!(query.skip, 25);
        assert_eq!(query.limit, 25);
    }
}
