//! Background page stream
//!
//! A single producer task walks the paginator and pushes items into a
//! bounded channel. The task owns the only sender, so the channel closes
//! exactly once, when the task returns. Cancellation is a watch flag the task
//! checks before each fetch, while a fetch is in flight, and at every send.

use super::paginator::Paginator;
use super::types::{IteratorResult, PageInfo};
use futures::Stream;
use serde::de::DeserializeOwned;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::{mpsc, watch};
use tracing::{debug, trace, warn};

/// Stream of items produced by [`Paginator::all`].
///
/// Yields items in page order; ends after the last page, or right after an
/// error unit. Dropping it cancels the background task.
pub struct PageStream<T> {
    rx: mpsc::Receiver<IteratorResult<T>>,
    cancel: CancelHandle,
}

impl<T> PageStream<T> {
    /// Receive the next item, or `None` once the stream has ended
    pub async fn recv(&mut self) -> Option<IteratorResult<T>> {
        self.rx.recv().await
    }

    /// Handle that cancels this stream's background task
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }
}

impl<T> Stream for PageStream<T> {
    type Item = IteratorResult<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

impl<T> Drop for PageStream<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.rx.close();
    }
}

impl<T> std::fmt::Debug for PageStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageStream")
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

/// Stops a [`PageStream`]'s background task.
///
/// Cloneable and safe to call any number of times from any task. Items the
/// task already buffered can still be received; after that the stream ends.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    /// Signal cancellation
    pub fn cancel(&self) {
        if !self.tx.send_replace(true) {
            debug!("Page stream cancelled");
        }
    }

    /// Whether cancellation has been signalled
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Start the producer task for `paginator`
pub(crate) fn spawn<T>(paginator: Paginator<T>) -> PageStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let (tx, rx) = mpsc::channel(paginator.buffer_size());
    let (cancel_tx, cancel_rx) = watch::channel(false);

    tokio::spawn(produce(paginator, tx, cancel_rx));

    PageStream {
        rx,
        cancel: CancelHandle {
            tx: Arc::new(cancel_tx),
        },
    }
}

async fn produce<T: DeserializeOwned>(
    mut paginator: Paginator<T>,
    tx: mpsc::Sender<IteratorResult<T>>,
    mut cancel: watch::Receiver<bool>,
) {
    let mut index = 0usize;

    while !paginator.is_exhausted() {
        if *cancel.borrow() {
            debug!("Stream cancelled after {} items", index);
            return;
        }

        // A fetch abandoned for cancellation emits nothing, even if it failed.
        let fetched = tokio::select! {
            biased;
            () = cancelled(&mut cancel) => None,
            fetched = paginator.fetch_page() => Some(fetched),
        };
        let Some(fetched) = fetched else {
            debug!("Stream cancelled during fetch after {} items", index);
            return;
        };

        match fetched {
            Ok((url, page)) => {
                let info = Arc::new(PageInfo::from_page(url, &page));
                for value in page.results {
                    let item = IteratorResult::value(Arc::clone(&info), index, value);
                    if !deliver(&tx, &mut cancel, item).await {
                        debug!("Stream stopped while delivering item {}", index);
                        return;
                    }
                    index += 1;
                }
            }
            Err(err) => {
                warn!("Stream failed after {} items: {}", index, err);
                deliver(&tx, &mut cancel, IteratorResult::error(index, err)).await;
                return;
            }
        }
    }

    debug!("Stream exhausted after {} items", index);
}

/// Send `item` unless cancelled first. Returns false when the stream should stop.
async fn deliver<T>(
    tx: &mpsc::Sender<IteratorResult<T>>,
    cancel: &mut watch::Receiver<bool>,
    item: IteratorResult<T>,
) -> bool {
    let index = item.index;
    let sent = tokio::select! {
        biased;
        () = cancelled(cancel) => false,
        sent = tx.send(item) => sent.is_ok(),
    };
    if sent {
        trace!("Delivered item {}", index);
    }
    sent
}

/// Resolves once cancellation is signalled
async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    let closed = cancel.wait_for(|cancelled| *cancelled).await.is_err();
    if closed {
        // every handle dropped without cancelling
        std::future::pending::<()>().await;
    }
}
