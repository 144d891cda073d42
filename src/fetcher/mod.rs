//! # Product Fetcher
//!
//! Resolves product handles into [`Product`] records.
//!
//! ## Failure containment
//!
//! A single product that cannot be fetched (network error, non-success status,
//! unexpected body) is simply missing from the carousel. [`ProductSource::fetch_one`]
//! turns every [`FetchError`] into `None`, so callers never see per-item errors.
//!
//! ## Fan-out / join
//!
//! [`fetch_all`] spawns one task per handle and waits for all of them. Total
//! latency is that of the slowest fetch; one failure neither cancels nor delays
//! the others. The only error it reports is a task that did not settle at all,
//! which is the aggregate failure the component renders as an error message.
//!
//! There is no timeout, retry, or cancellation. A hung request holds the
//! whole join, and dropping the caller leaves spawned tasks running.

mod http;

pub use http::HttpProductSource;

use crate::error::{CarouselError, FetchError};
use crate::model::Product;
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, Instrument};

/// Something that can look up a product by handle.
///
/// Implementors provide [`try_fetch`](ProductSource::try_fetch); the provided
/// [`fetch_one`](ProductSource::fetch_one) applies the swallow-on-failure policy.
#[async_trait]
pub trait ProductSource: Send + Sync + 'static {
    /// Fetch a product, reporting why it failed.
    async fn try_fetch(&self, handle: &str) -> Result<Product, FetchError>;

    /// Fetch a product, or `None` if it could not be fetched for any reason.
    #[tracing::instrument(skip(self))]
    async fn fetch_one(&self, handle: &str) -> Option<Product> {
        match self.try_fetch(handle).await {
            Ok(product) => {
                debug!("Fetched");
                Some(product)
            }
            Err(e) => {
                debug!(error = %e, "Fetch failed, skipping");
                None
            }
        }
    }
}

/// Fetches every handle concurrently and waits for all of them.
///
/// The result has one entry per handle, in input order; `None` marks a product
/// that could not be fetched.
///
/// # Errors
/// [`CarouselError::Join`] if a fetch task panicked or was cancelled.
pub async fn fetch_all(
    source: Arc<dyn ProductSource>,
    handles: &[String],
) -> Result<Vec<Option<Product>>, CarouselError> {
    debug!(count = handles.len(), "Fetching products");

    let tasks = handles.iter().map(|handle| {
        let source = Arc::clone(&source);
        let handle = handle.clone();
        tokio::spawn(async move { source.fetch_one(&handle).await }.in_current_span())
    });
    let settled = join_all(tasks).await;

    handles
        .iter()
        .zip(settled)
        .map(|(handle, result)| {
            result.map_err(|e| CarouselError::Join {
                handle: handle.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Drops the products that could not be fetched, keeping relative order.
pub fn present(fetched: Vec<Option<Product>>) -> Vec<Product> {
    fetched.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockProductSource;

    fn handles(list: &[&str]) -> Vec<String> {
        list.iter().map(|h| h.to_string()).collect()
    }

    #[tokio::test]
    async fn test_fetch_all_keeps_input_order() {
        let mut mock = MockProductSource::new();
        mock.expect_fetch("c").return_product(Product::new("c", "C"));
        mock.expect_fetch("b").return_absent();
        mock.expect_fetch("a").return_product(Product::new("a", "A"));

        let fetched = fetch_all(mock.source(), &handles(&["c", "b", "a"]))
            .await
            .unwrap();

        assert_eq!(fetched.len(), 3);
        assert!(fetched[1].is_none());
        let titles: Vec<_> = present(fetched).into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["C", "A"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_failures_do_not_short_circuit() {
        let mut mock = MockProductSource::new();
        mock.expect_fetch("x").return_absent();
        mock.expect_fetch("y").return_absent();

        let fetched = fetch_all(mock.source(), &handles(&["x", "y"])).await.unwrap();

        assert_eq!(fetched, vec![None, None]);
        assert_eq!(mock.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_panicking_task_is_aggregate_failure() {
        let mut mock = MockProductSource::new();
        mock.expect_fetch("ok").return_product(Product::new("ok", "Ok"));
        mock.expect_fetch("boom").panic();

        let result = fetch_all(mock.source(), &handles(&["ok", "boom"])).await;

        match result {
            Err(CarouselError::Join { handle, .. }) => assert_eq!(handle, "boom"),
            other => panic!("Expected Join error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_input_issues_no_requests() {
        let mock = MockProductSource::new();
        let fetched = fetch_all(mock.source(), &[]).await.unwrap();
        assert!(fetched.is_empty());
        assert!(mock.calls().is_empty());
    }
}
