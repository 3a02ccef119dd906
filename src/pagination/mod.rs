//! Pagination module
//!
//! The listing API pages with a `page`/`limit` query pair and returns, next
//! to each page of records, the URL of the following page. The last page
//! carries the string `"null"` in place of that URL.
//!
//! # Overview
//!
//! - [`ListingPage`] / [`Pagination`] decode the response envelope
//! - [`PageCursor`] builds the query for a page and advances the cursor from
//!   the server's next-page URL, stopping on the last page or a stall

mod cursor;
mod types;

pub use cursor::{page_from_url, PageCursor};
pub use types::{ListingPage, NextPage, Pagination, PaginationState, StopReason, NULL_NEXT_PAGE};

#[cfg(test)]
mod tests;
