// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cursor Pagination
//!
//! Pure slicing of an already-fetched, canonically ordered list into pages.
//!
//! ```text
//! full list:  [c100, c99, ... c81 | c80, ... c76]
//!                               ▲
//!             page 1 (after=None)│ page 2 (after="81")
//!             cursor = "81"      │ cursor = "76", has_more = false
//! ```
//!
//! # Example
//!
//! ```rust
//! use cim_launch_catalog::domain::Launch;
//! use cim_launch_catalog::pagination::{slice, PageRequest};
//!
//! let launches: Vec<Launch> = (1..=3).rev().map(|n| Launch::new(n, n as i64)).collect();
//! let page = slice(&launches, &PageRequest::new(2, None).unwrap()).unwrap();
//!
//! assert_eq!(page.items.len(), 2);
//! assert!(page.has_more);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{CatalogItem, Cursor};
use crate::errors::{CatalogError, CatalogResult};

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Validated pagination arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page_size: usize,
    after: Option<Cursor>,
}

impl PageRequest {
    /// Validate raw pagination arguments
    ///
    /// `page_size` must be at least 1.
    pub fn new(page_size: i64, after: Option<Cursor>) -> CatalogResult<Self> {
        if page_size < 1 {
            return Err(CatalogError::InvalidArgument(format!(
                "pageSize must be >= 1, got {}",
                page_size
            )));
        }

        let page_size = usize::try_from(page_size).map_err(|_| {
            CatalogError::InvalidArgument(format!("pageSize out of range: {}", page_size))
        })?;

        Ok(Self { page_size, after })
    }

    /// First page with the default size
    pub fn first() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            after: None,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn after(&self) -> Option<&Cursor> {
        self.after.as_ref()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page cut from the full list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Cursor of the last item in `items`, `None` for an empty page
    pub cursor: Option<Cursor>,
    /// Whether items exist after `cursor` in the full list
    pub has_more: bool,
}

/// Cut the next page out of `full`
///
/// The page starts right after the item whose cursor equals `request.after`
/// (or at the head when `after` is absent) and holds at most
/// `request.page_size()` items. An `after` cursor that matches nothing fails
/// with [`CatalogError::CursorNotFound`]; callers restart from `after = None`.
///
/// `has_more` is decided by position: it is true iff the page ends before the
/// end of `full`.
pub fn slice<T: CatalogItem>(full: &[T], request: &PageRequest) -> CatalogResult<Page<T>> {
    let start = match request.after() {
        None => 0,
        Some(after) => match full.iter().position(|item| item.cursor() == after) {
            Some(index) => index + 1,
            None => {
                warn!(cursor = %after, total = full.len(), "After-cursor not in current list");
                return Err(CatalogError::CursorNotFound(after.to_string()));
            }
        },
    };

    let end = start.saturating_add(request.page_size()).min(full.len());
    let items = full[start..end].to_vec();
    let cursor = items.last().map(|item| item.cursor().clone());
    let has_more = !items.is_empty() && end < full.len();

    debug!(
        start,
        end,
        total = full.len(),
        has_more,
        "Sliced page"
    );

    Ok(Page {
        items,
        cursor,
        has_more,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Launch;
    use test_case::test_case;

    /// 25 launches with cursors "100" down to "76"
    fn descending_launches() -> Vec<Launch> {
        (76..=100).rev().map(|n| Launch::new(n as u64, n)).collect()
    }

    fn cursors(page: &Page<Launch>) -> Vec<&str> {
        page.items.iter().map(|l| l.cursor.as_str()).collect()
    }

    #[test]
    fn test_first_page() {
        let full = descending_launches();
        let page = slice(&full, &PageRequest::new(20, None).unwrap()).unwrap();

        assert_eq!(page.items.len(), 20);
        assert_eq!(cursors(&page).first(), Some(&"100"));
        assert_eq!(page.cursor, Some(Cursor::new("81")));
        assert!(page.has_more);
    }

    #[test]
    fn test_second_page_ends_the_list() {
        let full = descending_launches();
        let page = slice(&full, &PageRequest::new(20, Some("81".into())).unwrap()).unwrap();

        assert_eq!(cursors(&page), vec!["80", "79", "78", "77", "76"]);
        assert_eq!(page.cursor, Some(Cursor::new("76")));
        assert!(!page.has_more);
    }

    #[test]
    fn test_exact_boundary_has_no_more() {
        let full = descending_launches();
        let page = slice(&full, &PageRequest::new(25, None).unwrap()).unwrap();

        assert_eq!(page.items.len(), 25);
        assert!(!page.has_more);
    }

    #[test]
    fn test_after_last_item_is_empty() {
        let full = descending_launches();
        let page = slice(&full, &PageRequest::new(20, Some("76".into())).unwrap()).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.cursor, None);
        assert!(!page.has_more);
    }

    #[test]
    fn test_empty_list() {
        let page = slice::<Launch>(&[], &PageRequest::first()).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.cursor, None);
        assert!(!page.has_more);
    }

    #[test]
    fn test_unknown_cursor_fails() {
        let full = descending_launches();
        let err = slice(&full, &PageRequest::new(20, Some("5".into())).unwrap()).unwrap_err();
        assert_eq!(err, CatalogError::CursorNotFound("5".to_string()));
    }

    #[test_case(0 ; "zero")]
    #[test_case(-3 ; "negative")]
    fn test_invalid_page_size(size: i64) {
        let err = PageRequest::new(size, None).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
    }

    #[test]
    fn test_default_request() {
        let request = PageRequest::default();
        assert_eq!(request.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(request.after(), None);
    }
}
