//! Page selection for paged queries.

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Where a paged query starts and how many items each page holds.
///
/// `start` is the opaque token the server hands back in a page's
/// metadata; `None` starts from the beginning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub count: u32,
    pub start: Option<String>,
}

impl Page {
    pub fn count(count: u32) -> Self {
        Self { count, start: None }
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::count(DEFAULT_PAGE_SIZE)
    }
}
