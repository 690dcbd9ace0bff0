//! Paginated response shape.

use serde::{Deserialize, Serialize};

/// One page of results plus the backend's pagination metadata.
///
/// Mirrors the `PageResponse` contract of the book-network backend; the
/// client treats it as opaque beyond the navigation flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub content: Vec<T>,
    /// Zero-based page number.
    pub number: u32,
    /// Requested page size.
    pub size: u32,
    /// Total number of items across all pages.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u32,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
}

impl<T> Page<T> {
    /// Returns an empty first page.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            size: 0,
            total_elements: 0,
            total_pages: 0,
            first: true,
            last: true,
        }
    }

    /// Returns the next page number, if any.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.last { None } else { Some(self.number + 1) }
    }

    /// Returns the previous page number, if any.
    #[must_use]
    pub const fn previous_page(&self) -> Option<u32> {
        if self.first {
            None
        } else {
            Some(self.number.saturating_sub(1))
        }
    }

    /// Maps the page content while keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_no_neighbours() {
        let page = Page::<u8>::empty();
        assert_eq!(page.next_page(), None);
        assert_eq!(page.previous_page(), None);
    }

    #[test]
    fn test_middle_page_navigation() {
        let page = Page::<u8> {
            content: vec![1, 2],
            number: 3,
            size: 2,
            total_elements: 10,
            total_pages: 5,
            first: false,
            last: false,
        };

        assert_eq!(page.next_page(), Some(4));
        assert_eq!(page.previous_page(), Some(2));
    }

    #[test]
    fn test_deserializes_backend_shape() {
        let json = r#"{
            "content": [7],
            "number": 0,
            "size": 10,
            "totalElements": 1,
            "totalPages": 1,
            "first": true,
            "last": true
        }"#;

        let page: Page<u8> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![7]);
        assert!(page.first && page.last);
    }
}
