//! # Mocks & Testing Guide
//!
//! In-memory stand-ins for the component's collaborators, so activation logic
//! can be tested without a network or a slider library.
//!
//! | Collaborator | Mock | Lets you |
//! |--------------|------|----------|
//! | [`ProductSource`] | [`MockProductSource`] | script per-handle results, delays, and task panics; inspect calls |
//! | [`SliderFactory`] | [`MockSliderFactory`] | record constructions; force construction errors |
//!
//! Storage needs no mock: [`MemoryStore`](crate::storage::MemoryStore) already
//! lives in memory.
//!
//! ## Example
//!
//! ```rust
//! use recently_viewed::fetcher::ProductSource;
//! use recently_viewed::mock::MockProductSource;
//! use recently_viewed::model::Product;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockProductSource::new();
//!     mock.expect_fetch("shoe-a").return_product(Product::new("shoe-a", "Shoe A"));
//!     mock.expect_fetch("shoe-b").return_absent();
//!
//!     let source = mock.source();
//!     assert!(source.fetch_one("shoe-a").await.is_some());
//!     assert!(source.fetch_one("shoe-b").await.is_none());
//!
//!     mock.verify(); // every expectation was consumed
//! }
//! ```
//!
//! Expectations are keyed by handle, not by arrival order, because fetches run
//! concurrently. A request with no matching expectation panics inside its task,
//! which [`fetch_all`](crate::fetcher::fetch_all) reports as an aggregate failure.

use crate::error::{FetchError, SliderError};
use crate::fetcher::ProductSource;
use crate::model::Product;
use crate::render::ElementRef;
use crate::slider::{Slider, SliderFactory, SliderOptions};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

// =============================================================================
// PRODUCT SOURCE
// =============================================================================

enum Outcome {
    Product(Product),
    Absent,
    Panic,
}

struct Expectation {
    delay: Option<Duration>,
    outcome: Outcome,
}

#[derive(Default)]
struct SourceState {
    expectations: Mutex<HashMap<String, VecDeque<Expectation>>>,
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl ProductSource for SourceState {
    async fn try_fetch(&self, handle: &str) -> Result<Product, FetchError> {
        lock(&self.calls).push(handle.to_string());
        let expectation = lock(&self.expectations)
            .get_mut(handle)
            .and_then(VecDeque::pop_front);

        let Some(expectation) = expectation else {
            panic!("Unexpected fetch for handle {handle:?}");
        };
        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        match expectation.outcome {
            Outcome::Product(product) => Ok(product),
            Outcome::Absent => Err(FetchError::Status {
                handle: handle.to_string(),
                status: 404,
            }),
            Outcome::Panic => panic!("Injected failure for handle {handle:?}"),
        }
    }
}

/// A scripted [`ProductSource`].
#[derive(Default)]
pub struct MockProductSource {
    state: Arc<SourceState>,
}

impl MockProductSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the source to hand to the code under test.
    pub fn source(&self) -> Arc<dyn ProductSource> {
        self.state.clone()
    }

    /// Expects one fetch of `handle`.
    pub fn expect_fetch(&mut self, handle: impl Into<String>) -> FetchExpectationBuilder {
        FetchExpectationBuilder {
            handle: handle.into(),
            delay: None,
            state: self.state.clone(),
        }
    }

    /// Handles requested so far, in arrival order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.state.calls).clone()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining: usize = lock(&self.state.expectations).values().map(VecDeque::len).sum();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for fetch expectations.
pub struct FetchExpectationBuilder {
    handle: String,
    delay: Option<Duration>,
    state: Arc<SourceState>,
}

impl FetchExpectationBuilder {
    /// Holds the response for `delay` before answering.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn return_product(self, product: Product) {
        self.push(Outcome::Product(product));
    }

    /// Answers like a 404.
    pub fn return_absent(self) {
        self.push(Outcome::Absent);
    }

    /// Panics inside the fetch task.
    pub fn panic(self) {
        self.push(Outcome::Panic);
    }

    fn push(self, outcome: Outcome) {
        lock(&self.state.expectations)
            .entry(self.handle)
            .or_default()
            .push_back(Expectation {
                delay: self.delay,
                outcome,
            });
    }
}

// =============================================================================
// SLIDER FACTORY
// =============================================================================

/// One slider construction seen by [`MockSliderFactory`].
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConstruction {
    pub container: ElementRef,
    pub options: SliderOptions,
}

#[derive(Debug)]
struct MockSlider {
    container: ElementRef,
}

impl Slider for MockSlider {
    fn container(&self) -> &ElementRef {
        &self.container
    }

    fn init_script(&self) -> Option<String> {
        None
    }
}

/// A [`SliderFactory`] that records what it was asked to build.
#[derive(Debug, Clone, Default)]
pub struct MockSliderFactory {
    constructions: Arc<Mutex<Vec<SliderConstruction>>>,
    failure: Option<SliderError>,
}

impl MockSliderFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory whose every construction fails with `error`.
    pub fn failing(error: SliderError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn constructions(&self) -> Vec<SliderConstruction> {
        lock(&self.constructions).clone()
    }
}

impl SliderFactory for MockSliderFactory {
    fn create(
        &self,
        container: &ElementRef,
        options: &SliderOptions,
    ) -> Result<Box<dyn Slider>, SliderError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        lock(&self.constructions).push(SliderConstruction {
            container: container.clone(),
            options: options.clone(),
        });
        Ok(Box::new(MockSlider {
            container: container.clone(),
        }))
    }
}
