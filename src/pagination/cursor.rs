//! Page cursor
//!
//! Requests pages as `page=<n>&limit=<size>` and reads the next page number
//! from the `page` parameter of the server-supplied next-page URL. Relative
//! next-page URLs are resolved against the API base URL.

use super::types::{NextPage, Pagination, PaginationState, StopReason};
use crate::error::{Error, Result};
use tracing::{debug, warn};
use url::Url;

/// Page-number cursor driven by the server's next-page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    /// Query parameter name for page number
    pub page_param: String,
    /// Query parameter name for page size
    pub limit_param: String,
    /// Records requested per page
    pub page_size: u32,
    /// First page requested
    pub start_page: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page_param: "page".to_string(),
            limit_param: "limit".to_string(),
            page_size: 50,
            start_page: 1,
        }
    }
}

impl PageCursor {
    /// Cursor with the given page size
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Set the first page
    #[must_use]
    pub fn with_start_page(mut self, page: u32) -> Self {
        self.start_page = page;
        self
    }

    /// State positioned at the first page
    pub fn initial_state(&self) -> PaginationState {
        PaginationState::with_page(self.start_page)
    }

    /// Query pairs for the page in `state`, page first
    pub fn query_params(&self, state: &PaginationState) -> Vec<(String, String)> {
        vec![
            (self.page_param.clone(), state.page.to_string()),
            (self.limit_param.clone(), self.page_size.to_string()),
        ]
    }

    /// Account for a decoded page and decide where to go next.
    ///
    /// `base` resolves relative next-page URLs. A next-page URL that does
    /// not parse, or has no numeric page parameter, is an error. A next page
    /// equal to the current one ends the walk as a stall rather than looping.
    pub fn advance(
        &self,
        pagination: &Pagination,
        records_count: usize,
        base: Option<&Url>,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        state.add_page(records_count);

        let Some(next_url) = pagination.next_page.as_deref() else {
            state.mark_done(StopReason::LastPage);
            return Ok(NextPage::Done(StopReason::LastPage));
        };

        let next = page_from_url(next_url, base, &self.page_param)?;
        if next == state.page {
            warn!(
                page = state.page,
                next_url, "Next page points at the current page, stopping"
            );
            state.mark_done(StopReason::Stalled);
            return Ok(NextPage::Done(StopReason::Stalled));
        }

        debug!(from = state.page, to = next, "Advancing page cursor");
        state.page = next;
        Ok(NextPage::Continue(next))
    }
}

/// Extract the numeric `param` query parameter from `url`.
///
/// Without a `base`, `url` must be absolute.
pub fn page_from_url(url: &str, base: Option<&Url>, param: &str) -> Result<u32> {
    let parsed = Url::options().base_url(base).parse(url)?;
    let value = parsed
        .query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| Error::decode(format!("next page URL has no '{param}' parameter: {url}")))?;

    value.parse().map_err(|_| {
        Error::decode(format!(
            "next page URL has a non-numeric '{param}' parameter '{value}': {url}"
        ))
    })
}
