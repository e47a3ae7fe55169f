use crate::error::GatehouseError;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// Page size used when the caller does not provide one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Upper bound accepted by the console for a single page.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// `PageRequest` identifies a page of a list by its 1-based number and size.
///
/// The backend expects a zero-based offset (`skip`) and a `limit` instead, see
/// [`PageRequest::skip`] and [`PageRequest::limit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub current: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(current: u32, page_size: u32) -> Self {
        Self { current, page_size }
    }

    pub fn first(page_size: u32) -> Self {
        Self::new(1, page_size)
    }

    /// Zero-based offset of the first row. Zero when either part is unset.
    pub fn skip(&self) -> u64 {
        if self.current == 0 || self.page_size == 0 {
            return 0;
        }

        (self.current as u64 - 1) * self.page_size as u64
    }

    pub fn limit(&self) -> u32 {
        if self.page_size == 0 {
            return DEFAULT_PAGE_SIZE;
        }

        self.page_size
    }
}

impl Validatable<GatehouseError> for PageRequest {
    fn validate(&self) -> Result<(), GatehouseError> {
        if self.page_size > MAX_PAGE_SIZE {
            return Err(GatehouseError::InvalidPageSize(self.page_size));
        }

        Ok(())
    }
}

/// Query parameters of a paginated list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub skip: u64,
    pub limit: u32,
}

impl From<&PageRequest> for PageQuery {
    fn from(page: &PageRequest) -> Self {
        Self {
            skip: page.skip(),
            limit: page.limit(),
        }
    }
}

/// `Page` is a single page of a list together with its total count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub success: bool,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: Option<u64>) -> Self {
        let total = total.unwrap_or(data.len() as u64);
        Self {
            data,
            total,
            success: true,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_page_of_twenty_should_skip_forty() {
        let page = PageRequest::new(3, 20);
        assert_eq!(page.skip(), 40);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn first_page_should_not_skip() {
        assert_eq!(PageRequest::first(50).skip(), 0);
        assert_eq!(PageRequest::default().limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn unset_parts_should_fall_back_to_defaults() {
        assert_eq!(PageRequest::new(0, 20).skip(), 0);
        assert_eq!(PageRequest::new(4, 0).skip(), 0);
        assert_eq!(PageRequest::new(4, 0).limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn oversized_page_should_be_rejected() {
        assert!(PageRequest::new(1, MAX_PAGE_SIZE).validate().is_ok());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE + 1).validate().is_err());
    }

    #[test]
    fn query_should_carry_skip_and_limit() {
        let query = PageQuery::from(&PageRequest::new(2, 10));
        assert_eq!(query, PageQuery { skip: 10, limit: 10 });
    }

    #[test]
    fn page_total_should_default_to_received_rows() {
        let page = Page::new(vec![1, 2, 3], None);
        assert_eq!(page.total, 3);
        assert!(page.success);

        let page = Page::new(vec![1], Some(42));
        assert_eq!(page.total, 42);
    }
}
