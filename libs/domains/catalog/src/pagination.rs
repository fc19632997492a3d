//! Page arithmetic and the list response envelope.

use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u64 = 1;
pub const MAX_LIMIT: u64 = 100;
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Requested page, 1-based, and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Documents to skip before this page starts, capped at what the store
    /// accepts as a signed 64-bit skip.
    pub fn skip(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(MAX_SKIP)
    }

    /// Number of pages needed for `total` items; 1 for a zero limit.
    pub fn pages(&self, total: u64) -> u64 {
        if self.limit == 0 {
            1
        } else {
            total.div_ceil(self.limit)
        }
    }
}

/// Paginated list envelope
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub pages: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            items,
            page: pagination.page,
            pages: pagination.pages(total),
            total,
        }
    }

    /// Envelope returned when there is no store to query.
    pub fn empty(page: u64) -> Self {
        Self {
            items: Vec::new(),
            page,
            pages: 0,
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_and_pages_across_valid_inputs() {
        for page in 1..=5u64 {
            for limit in 1..=MAX_LIMIT {
                let p = Pagination::new(page, limit);
                assert_eq!(p.skip(), (page - 1) * limit);
                for total in [0u64, 1, 11, 12, 13, 99, 100, 101, 250] {
                    let expected = (total as f64 / limit as f64).ceil() as u64;
                    assert_eq!(p.pages(total), expected, "total={total} limit={limit}");
                }
            }
        }
    }

    #[test]
    fn test_zero_limit_is_one_page() {
        assert_eq!(Pagination::new(1, 0).pages(42), 1);
        assert_eq!(Pagination::new(3, 0).skip(), 0);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        assert_eq!(Pagination::new(u64::MAX, 100).skip(), MAX_SKIP);
        assert_eq!(Pagination::new(u64::MAX / 2, 100).skip(), MAX_SKIP);
        assert!(i64::try_from(Pagination::new(u64::MAX, 1).skip()).is_ok());
    }

    #[test]
    fn test_page_beyond_last_keeps_metadata() {
        let page: Page<u32> = Page::new(Vec::new(), Pagination::new(9, 12), 5);
        assert_eq!(page.pages, 1);
        assert_eq!(page.page, 9);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_empty_envelope() {
        let page: Page<u32> = Page::empty(3);
        assert_eq!((page.page, page.pages, page.total), (3, 0, 0));
    }
}
