//! Listing engine
//!
//! Walks a paginated collection one page at a time and hands every record to
//! the caller in page order, then in-page order.
//!
//! # Overview
//!
//! Each iteration fetches `page=<cursor>&limit=<size>`, decodes the envelope,
//! emits the records and then advances the cursor from the next-page URL.
//! The walk ends when the server reports no next page or when the next page
//! equals the current one. Any request, decode or cursor error aborts the
//! walk; there are no retries and pages are never fetched concurrently.

mod types;

pub use types::{ListConfig, ListSummary};


use crate::error::{Error, Result};
use crate::http::{Endpoint, HttpClient};
use crate::models::PropertyRecord;
use crate::pagination::{ListingPage, Pagination, PaginationState};
use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

/// Lists every record of a paginated collection
#[derive(Debug, Clone)]
pub struct Lister<'c> {
    client: &'c HttpClient,
    config: ListConfig,
}

/// Cursor state carried between pages of a stream
struct Walk {
    state: PaginationState,
    base: Option<Url>,
    /// Last yielded page's metadata, not yet used to advance
    pending: Option<(Pagination, usize)>,
}

impl<'c> Lister<'c> {
    /// Lister over the property collection with default paging
    pub fn new(client: &'c HttpClient) -> Self {
        Self {
            client,
            config: ListConfig::default(),
        }
    }

    /// Set list configuration
    #[must_use]
    pub fn with_config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the list configuration
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Base for relative next-page URLs
    fn next_page_base(&self) -> Option<Url> {
        Url::parse(self.client.base_url()).ok()
    }

    /// Fetch and decode the page the state points at
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        state: &PaginationState,
    ) -> Result<ListingPage<T>> {
        let endpoint = Endpoint::new(self.config.resource_path.as_str())
            .query_pairs(self.config.cursor.query_params(state));

        let body = self.client.get(&endpoint).await?;
        let page = ListingPage::<T>::from_slice(&body)?;

        debug!(
            "Page {}: fetched {} records (total {})",
            state.page,
            page.items.len(),
            page.pagination.total
        );
        Ok(page)
    }

    /// Visit every record in order and report how the walk ended
    pub async fn for_each<T, F>(&self, mut visit: F) -> Result<ListSummary>
    where
        T: DeserializeOwned,
        F: FnMut(T),
    {
        let cursor = &self.config.cursor;
        let mut state = cursor.initial_state();
        let base = self.next_page_base();

        loop {
            let page = self.fetch_page::<T>(&state).await?;
            let count = page.items.len();
            for item in page.items {
                visit(item);
            }

            if cursor
                .advance(&page.pagination, count, base.as_ref(), &mut state)?
                .is_done()
            {
                break;
            }
        }

        let stop = state
            .stop
            .ok_or_else(|| Error::Other("pagination ended without a stop reason".to_string()))?;
        let summary = ListSummary {
            pages: state.pages_fetched,
            records: state.total_fetched,
            stop,
        };

        info!(
            "Listed {}: {} pages, {} records ({:?})",
            self.config.resource_path, summary.pages, summary.records, summary.stop
        );
        Ok(summary)
    }

    /// Collect every record in order
    pub async fn collect<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let mut records = Vec::new();
        self.for_each(|record| records.push(record)).await?;
        Ok(records)
    }

    /// Collect every property in order
    pub async fn list_properties(&self) -> Result<Vec<PropertyRecord>> {
        self.collect().await
    }

    async fn next_page<T: DeserializeOwned>(
        &self,
        mut walk: Walk,
    ) -> Result<Option<(ListingPage<T>, Walk)>> {
        if let Some((pagination, count)) = walk.pending.take() {
            if self
                .config
                .cursor
                .advance(&pagination, count, walk.base.as_ref(), &mut walk.state)?
                .is_done()
            {
                return Ok(None);
            }
        }

        let page = self.fetch_page::<T>(&walk.state).await?;
        walk.pending = Some((page.pagination.clone(), page.items.len()));
        Ok(Some((page, walk)))
    }

    /// Stream pages lazily; the next request is made only when polled
    pub fn pages<'a, T>(&'a self) -> impl Stream<Item = Result<ListingPage<T>>> + 'a
    where
        T: DeserializeOwned + 'a,
    {
        let walk = Walk {
            state: self.config.cursor.initial_state(),
            base: self.next_page_base(),
            pending: None,
        };
        stream::try_unfold(walk, move |walk| self.next_page::<T>(walk))
    }

    /// Stream records lazily, flattened across pages
    pub fn records<'a, T>(&'a self) -> impl Stream<Item = Result<T>> + 'a
    where
        T: DeserializeOwned + 'a,
    {
        self.pages::<T>()
            .map_ok(|page| stream::iter(page.items.into_iter().map(Ok)))
            .try_flatten()
    }
}
