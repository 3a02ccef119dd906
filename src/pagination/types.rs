//! Pagination types
//!
//! The response envelope and the state tracked while walking pages.

use crate::error::Result;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Wire value of `next_page` on the last page
pub const NULL_NEXT_PAGE: &str = "null";

/// Pagination metadata returned with every page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total: u64,
    /// URL of the next page, `None` on the last page
    #[serde(
        default,
        deserialize_with = "deserialize_next_page",
        serialize_with = "serialize_next_page"
    )]
    pub next_page: Option<String>,
}

impl Pagination {
    /// Whether the server announced another page
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Number of pages implied by `total` and `limit`
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }
}

// The API writes the string "null" rather than a JSON null; accept both.
fn deserialize_next_page<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|url| url != NULL_NEXT_PAGE))
}

fn serialize_next_page<S>(
    next_page: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(next_page.as_deref().unwrap_or(NULL_NEXT_PAGE))
}

/// One page of a listing: metadata plus records in server order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage<T> {
    pub pagination: Pagination,
    #[serde(rename = "content", default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T: DeserializeOwned> ListingPage<T> {
    /// Decode a page from a raw response body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Why a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The server reported no next page
    LastPage,
    /// The next page pointed back at the current one
    Stalled,
}

/// Result of advancing the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this page next
    Continue(u32),
    /// Stop walking
    Done(StopReason),
}

impl NextPage {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Page to request next
    pub page: u32,
    /// Pages decoded so far
    pub pages_fetched: u32,
    /// Records seen so far
    pub total_fetched: u64,
    /// Set once the walk has ended
    pub stop: Option<StopReason>,
}

impl PaginationState {
    /// Create state with a starting page
    pub fn with_page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Is pagination complete?
    pub fn is_done(&self) -> bool {
        self.stop.is_some()
    }

    /// Record a decoded page
    pub fn add_page(&mut self, records: usize) {
        self.pages_fetched += 1;
        self.total_fetched += records as u64;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self, reason: StopReason) {
        self.stop = Some(reason);
    }
}
