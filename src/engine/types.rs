//! Lister configuration and summary types

use crate::models::PROPERTIES_PATH;
use crate::pagination::{PageCursor, StopReason};

/// What to list and how to page through it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Collection path under the base URL
    pub resource_path: String,
    /// Paging parameters
    pub cursor: PageCursor,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            resource_path: PROPERTIES_PATH.to_string(),
            cursor: PageCursor::default(),
        }
    }
}

impl ListConfig {
    /// List a different collection
    pub fn for_resource(resource_path: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
            ..Default::default()
        }
    }

    /// Set records per page
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.cursor.page_size = size;
        self
    }

    /// Set the first page
    #[must_use]
    pub fn start_page(mut self, page: u32) -> Self {
        self.cursor.start_page = page;
        self
    }
}

/// Outcome of a completed walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSummary {
    /// Pages fetched
    pub pages: u32,
    /// Records visited
    pub records: u64,
    /// Why the walk ended
    pub stop: StopReason,
}

impl ListSummary {
    /// Whether the walk ended on the stall guard rather than the last page
    pub fn stalled(&self) -> bool {
        self.stop == StopReason::Stalled
    }
}
