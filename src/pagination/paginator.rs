//! Cursor-driven paginator
//!
//! Follows the `next` link chain of a listing one page at a time, either under
//! the caller's control (`next`) or in a background task (`all`).

use super::stream::{self, CancelHandle, PageStream};
use super::types::Page;
use crate::error::{Error, Result};
use crate::http::Sdk;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

/// Paginates through a listing.
///
/// Each paginator owns its cursor: `next` advances it in place, while `all`
/// and `all_with_cancel` consume the paginator and hand the cursor to a
/// background task.
///
/// ```rust,ignore
/// let mut pages = sdk.list_pokemon();
/// while !pages.is_exhausted() {
///     let page = pages.next().await?;
///     println!("{} of {}", page.results.len(), page.count);
/// }
/// ```
pub struct Paginator<T> {
    sdk: Sdk,
    cursor: Option<String>,
    buffer_size: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Paginator<T> {
    /// Create a paginator starting at `url`
    pub fn new(sdk: Sdk, url: impl Into<String>) -> Self {
        let url = url.into();
        let buffer_size = sdk.page_buffer_size();
        Self {
            sdk,
            cursor: Some(url).filter(|u| !u.is_empty()),
            buffer_size,
            _marker: PhantomData,
        }
    }

    /// Override the stream buffer size (values below 1 are treated as 1)
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// URL of the next page to fetch
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// True once the last page has been fetched
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    /// Buffer size streams started from this paginator will use
    pub fn buffer_size(&self) -> usize {
        self.buffer_size.max(1)
    }
}

impl<T: DeserializeOwned> Paginator<T> {
    /// Fetch the next page and advance the cursor to its `next` link.
    ///
    /// Returns [`Error::NoMorePages`] without making a request once the last
    /// page has been fetched. On failure the cursor is left where it was.
    #[allow(clippy::should_implement_trait)]
    pub async fn next(&mut self) -> Result<Page<T>> {
        let (_, page) = self.fetch_page().await?;
        Ok(page)
    }

    /// Fetch one page, returning it with the URL it came from
    pub(crate) async fn fetch_page(&mut self) -> Result<(String, Page<T>)> {
        let Some(url) = self.cursor.clone() else {
            return Err(Error::NoMorePages);
        };

        let page: Page<T> = self.sdk.follow(&url).await?;
        debug!(
            "Fetched page {}: {} items, next: {:?}",
            url,
            page.results.len(),
            page.next
        );

        self.cursor = page.next.clone();
        Ok((url, page))
    }
}

impl<T: DeserializeOwned + Send + 'static> Paginator<T> {
    /// Stream every item of every page.
    ///
    /// Pages are fetched in a background task that runs up to
    /// [`buffer_size`](Self::buffer_size) items ahead of the consumer. A fetch
    /// error is delivered as a final error unit. Dropping the stream stops the
    /// background task.
    ///
    /// ```rust,ignore
    /// let mut stream = sdk.list_pokemon().all();
    /// while let Some(item) = stream.next().await {
    ///     let link = item.into_result()?;
    ///     println!("Pokemon: {}", link.name);
    /// }
    /// ```
    pub fn all(self) -> PageStream<T> {
        stream::spawn(self)
    }

    /// Like [`all`](Self::all), plus a handle that stops the background task
    /// from anywhere.
    ///
    /// ```rust,ignore
    /// let (mut stream, cancel) = sdk.list_pokemon().all_with_cancel();
    /// while let Some(item) = stream.next().await {
    ///     if item.index >= 50 {
    ///         cancel.cancel();
    ///         break;
    ///     }
    /// }
    /// ```
    pub fn all_with_cancel(self) -> (PageStream<T>, CancelHandle) {
        let stream = stream::spawn(self);
        let cancel = stream.cancel_handle();
        (stream, cancel)
    }
}

impl<T> std::fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("cursor", &self.cursor)
            .field("buffer_size", &self.buffer_size)
            .finish_non_exhaustive()
    }
}
