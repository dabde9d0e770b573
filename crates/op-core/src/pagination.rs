//! Pagination parameters for API v3 collections
//!
//! OpenProject paginates collections by page: `offset` is the 1-indexed page number
//! and `pageSize` the number of elements per page.

use serde::{Deserialize, Serialize};

/// Largest page size the API accepts by default
pub const MAX_PAGE_SIZE: u32 = 1000;

fn default_offset() -> u32 {
    1
}

fn default_page_size() -> u32 {
    100
}

/// Page selector sent as query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Page number (1-indexed)
    #[serde(default = "default_offset")]
    pub offset: u32,

    /// Items per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: default_offset(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    /// First page with the given size, clamped to the accepted range
    pub fn first(page_size: u32) -> Self {
        Self {
            offset: 1,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// The following page, sized the way the server served this one
    ///
    /// Servers may cap `pageSize` below the requested value and then page by
    /// their own size; a smaller reported size is adopted, a larger one ignored.
    pub fn next(self, served_page_size: Option<u64>) -> Self {
        let page_size = served_page_size
            .and_then(|size| u32::try_from(size).ok())
            .filter(|size| *size > 0)
            .map_or(self.page_size, |size| size.min(self.page_size));

        Self {
            offset: self.offset + 1,
            page_size,
        }
    }

    /// Query pairs for the request URL
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("offset", self.offset.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }

    /// Whether another page must be requested
    ///
    /// `fetched` counts the elements received so far over all pages. An empty
    /// page ends the iteration even when `total` claims more.
    pub fn has_more(total: u64, fetched: u64, received_on_page: usize) -> bool {
        received_on_page > 0 && fetched < total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_clamps_size() {
        assert_eq!(PageRequest::first(0).page_size, 1);
        assert_eq!(PageRequest::first(5000).page_size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::first(50).offset, 1);
    }

    #[test]
    fn test_has_more() {
        assert!(PageRequest::has_more(45, 20, 20));
        assert!(PageRequest::has_more(45, 40, 20));
        assert!(!PageRequest::has_more(45, 45, 5));
        assert!(!PageRequest::has_more(20, 20, 20));
    }

    #[test]
    fn test_has_more_counts_elements_not_requested_size() {
        // 4 requested, server serves 2 per page
        assert!(PageRequest::has_more(5, 2, 2));
        assert!(PageRequest::has_more(5, 4, 2));
        assert!(!PageRequest::has_more(5, 5, 1));
    }

    #[test]
    fn test_empty_page_stops_iteration() {
        assert!(!PageRequest::has_more(100, 40, 0));
    }

    #[test]
    fn test_next_adopts_smaller_served_size() {
        let page = PageRequest::first(100);
        assert_eq!(page.next(Some(20)), PageRequest { offset: 2, page_size: 20 });
        assert_eq!(page.next(Some(500)).page_size, 100);
        assert_eq!(page.next(Some(0)).page_size, 100);
        assert_eq!(page.next(None), PageRequest { offset: 2, page_size: 100 });
    }

    #[test]
    fn test_query_pairs() {
        let pairs = PageRequest::first(25).next(None).query_pairs();
        assert_eq!(pairs[0], ("offset", "2".to_string()));
        assert_eq!(pairs[1], ("pageSize", "25".to_string()));
    }
}
