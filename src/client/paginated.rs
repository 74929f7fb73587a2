//! Lazy, cancellable iteration over paginated endpoints.
//!
//! List endpoints return one page plus a `next` link. [`PageStream`] follows
//! that chain in a producer task and hands items to the consumer through a
//! single-slot channel, so an arbitrarily large result set is never held in
//! memory at once and the producer can run at most one item ahead of the
//! consumer.

use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::{FutureExt, Stream};
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::ClientInner;
use crate::{Error, Result};

/// A stream of items lazily fetched page by page.
///
/// Items arrive in server page order. A page-fetch failure is delivered as
/// the stream's final item; cancellation ends the stream cleanly without an
/// error and without issuing the next page's request. The stream is not
/// restartable.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use akeneo_rs::CancellationToken;
///
/// # async fn example(client: akeneo_rs::AkeneoClient) -> akeneo_rs::Result<()> {
/// let cancel = CancellationToken::new();
/// let mut stream = client.categories().stream(None, cancel.clone());
///
/// while let Some(category) = stream.next().await {
///     let category = category?;
///     println!("{}", category.code);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PageStream<T> {
    rx: mpsc::Receiver<Result<T>>,
}

impl<T> PageStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Spawn the producer task for `path`, seeded with `initial_query`.
    ///
    /// An `Err` initial query (options that failed to encode) is delivered
    /// to the consumer as the stream's only item.
    pub(crate) fn spawn(
        inner: Arc<ClientInner>,
        path: String,
        initial_query: Result<Vec<(String, String)>>,
        cancel: CancellationToken,
    ) -> Self {
        let (tx, rx) = mpsc::channel(1);

        tokio::spawn(async move {
            let producer_tx = tx.clone();
            let produce = async move {
                let mut query = match initial_query {
                    Ok(pairs) => pairs,
                    Err(err) => {
                        let _ = producer_tx.send(Err(err)).await;
                        return;
                    }
                };

                loop {
                    // Cooperative cancellation, checked at page boundaries
                    // only; an in-flight fetch is never interrupted.
                    if cancel.is_cancelled() {
                        tracing::debug!(path = %path, "pagination stream cancelled");
                        return;
                    }

                    let page = match inner.get_page::<T>(&path, &query).await {
                        Ok(page) => page,
                        Err(err) => {
                            let _ = producer_tx.send(Err(err)).await;
                            return;
                        }
                    };

                    let next = page.links.next_query();
                    for item in page.into_items() {
                        if producer_tx.send(Ok(item)).await.is_err() {
                            // Consumer dropped the stream.
                            return;
                        }
                    }

                    match next {
                        Some(pairs) => query = pairs,
                        None => return,
                    }
                }
            };

            if let Err(panic) = AssertUnwindSafe(produce).catch_unwind().await {
                let message = panic_message(panic.as_ref());
                tracing::warn!(message = %message, "pagination producer panicked");
                let _ = tx.send(Err(Error::Stream(message))).await;
            }
        });

        Self { rx }
    }
}

impl<T> Stream for PageStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

impl<T> Unpin for PageStream<T> {}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "producer task panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_downcasts() {
        assert_eq!(panic_message(&"boom"), "boom");
        assert_eq!(panic_message(&"boom".to_string()), "boom");
        assert_eq!(panic_message(&42_u32), "producer task panicked");
    }
}
