//! Pagination types
//!
//! Wire shape of a page and the unit emitted by a background stream.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

/// Default number of items a background stream buffers ahead of its consumer.
///
/// A larger buffer makes it more likely the next item is already there when
/// asked for, at the cost of memory.
pub const DEFAULT_PAGE_BUFFER_SIZE: usize = 10;

/// A single page of results: this page's items, next/previous links, and a
/// total item count across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    /// Total number of items reported by the server (may be approximate)
    #[serde(default)]
    pub count: u64,
    /// Link to the next page, `None` on the last page
    #[serde(default, deserialize_with = "non_empty_link")]
    pub next: Option<String>,
    /// Link to the previous page
    #[serde(default, deserialize_with = "non_empty_link")]
    pub previous: Option<String>,
    /// Items on this page, in order
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Cursor for the next page, if any
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Whether this is the last page
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// `null`, absent and `""` all mean "no link"
fn non_empty_link<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let link = Option::<String>::deserialize(deserializer)?;
    Ok(link.filter(|s| !s.is_empty()))
}

/// Page metadata attached to each streamed item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// URL the page was fetched from
    pub url: String,
    /// Total count reported on the page
    pub count: u64,
    /// Next link of the page
    pub next: Option<String>,
    /// Previous link of the page
    pub previous: Option<String>,
    /// Number of items on the page
    pub len: usize,
}

impl PageInfo {
    pub(crate) fn from_page<T>(url: impl Into<String>, page: &Page<T>) -> Self {
        Self {
            url: url.into(),
            count: page.count,
            next: page.next.clone(),
            previous: page.previous.clone(),
            len: page.results.len(),
        }
    }
}

/// One item produced by a paginator stream.
///
/// Carries the page it came from, its zero-based position across the whole
/// stream, and either the item or the error that ended the stream. An error
/// unit is always the last one.
///
/// ```rust,ignore
/// while let Some(item) = stream.next().await {
///     let pokemon = item.into_result()?;
///     println!("{}", pokemon.name);
/// }
/// ```
#[derive(Debug)]
pub struct IteratorResult<T> {
    /// Page the item came from; `None` for error units
    pub page: Option<Arc<PageInfo>>,
    /// Zero-based index across all pages
    pub index: usize,
    /// The item, or the error that terminated the stream
    pub result: Result<T>,
}

impl<T> IteratorResult<T> {
    pub(crate) fn value(page: Arc<PageInfo>, index: usize, value: T) -> Self {
        Self {
            page: Some(page),
            index,
            result: Ok(value),
        }
    }

    pub(crate) fn error(index: usize, error: Error) -> Self {
        Self {
            page: None,
            index,
            result: Err(error),
        }
    }

    /// The item, unless this is an error unit
    pub fn ok(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// The error, if this is an error unit
    pub fn err(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }

    /// Whether this unit carries an error
    pub fn is_error(&self) -> bool {
        self.result.is_err()
    }

    /// Consume the unit into its result
    pub fn into_result(self) -> Result<T> {
        self.result
    }
}
