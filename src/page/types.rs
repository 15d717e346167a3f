//! Pagination types

/// One page of a listing endpoint's results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server-provided order
    pub items: Vec<T>,
    /// Opaque cursor for the next page; `None` or `""` means last page
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a page with an optional continuation token
    pub fn new(items: Vec<T>, next_page_token: Option<String>) -> Self {
        Self {
            items,
            next_page_token,
        }
    }

    /// Create a final page with no continuation token
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page_token: None,
        }
    }

    /// The continuation token, with the server's empty-string spelling of
    /// "no more pages" normalized away
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Check if this is the last page
    pub fn is_last(&self) -> bool {
        self.next_token().is_none()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::last(Vec::new())
    }
}

/// Guard against unbounded pagination.
///
/// The default allows 1,000 pages and unlimited items, which is far beyond
/// any real collection while still cutting off a server that never stops
/// returning tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit {
    /// Maximum number of page fetches; `None` trusts the server
    pub max_pages: Option<u32>,
    /// Maximum number of accumulated items; `None` trusts the server
    pub max_items: Option<usize>,
}

impl Default for PageLimit {
    fn default() -> Self {
        Self {
            max_pages: Some(1_000),
            max_items: None,
        }
    }
}

impl PageLimit {
    /// Limit by page count
    pub fn pages(max_pages: u32) -> Self {
        Self {
            max_pages: Some(max_pages),
            max_items: None,
        }
    }

    /// No limit: trust the server to terminate
    pub fn unbounded() -> Self {
        Self {
            max_pages: None,
            max_items: None,
        }
    }

    /// Also cap the accumulated item count
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }
}
