//! Pagination module
//!
//! Turns a listing's chain of `next` links into either page-at-a-time calls
//! or one ordered stream of items.
//!
//! # Overview
//!
//! - [`Paginator::next`] fetches one page and advances the cursor.
//! - [`Paginator::all`] spawns a background task that fetches ahead of the
//!   consumer into a bounded buffer and yields [`IteratorResult`]s.
//! - [`Paginator::all_with_cancel`] also returns a [`CancelHandle`].

mod paginator;
mod stream;
mod types;

pub use paginator::Paginator;
pub use stream::{CancelHandle, PageStream};
pub use types::{IteratorResult, Page, PageInfo, DEFAULT_PAGE_BUFFER_SIZE};
