//! # Recently Viewed
//!
//! > **A recently viewed products carousel as a self-contained component.**
//!
//! Product pages append the current product's handle to a list in the
//! shopper's local storage. This crate reads that list back, fetches each
//! product's public JSON from the storefront, and renders a scoped carousel
//! that a slider library makes scrollable.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Injected collaborators
//!
//! The component owns no I/O of its own. Storage, product lookup, and the
//! slider library all arrive as trait objects:
//!
//! - [`IdentifierStore`](storage::IdentifierStore) - where the handles live
//! - [`ProductSource`](fetcher::ProductSource) - how a handle becomes a product
//! - [`SliderFactory`](slider::SliderFactory) - optional interactivity
//!
//! This keeps the load sequence testable with in-memory fakes and keeps the
//! render logic free of any particular slider library.
//!
//! ### Failures stay local
//!
//! - A missing or corrupt stored list reads as empty.
//! - A product that cannot be fetched is left out of the carousel.
//! - A missing slider library leaves a static list.
//! - Only a fan-out that fails as a whole shows an error message.
//!
//! Every path ends in a rendered state.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Orchestrator ([`component`])
//! - **Role**: runs read → fetch → render → slider, once per activation.
//! - **Key items**: [`RecentlyViewedCarousel`](component::RecentlyViewedCarousel), [`Activation`](component::Activation).
//!
//! ### 2. The Stages ([`storage`], [`fetcher`], [`render`], [`slider`])
//! - **Role**: one module per stage, each usable on its own.
//! - **Key items**: [`read_recent`](storage::read_recent), [`fetch_all`](fetcher::fetch_all),
//!   [`IsolatedRoot`](render::IsolatedRoot), [`init_slider`](slider::init_slider).
//!
//! ### 3. The Host ([`lifecycle`])
//! - **Role**: wires native collaborators (a JSON file for storage, HTTP for
//!   products, Swiper for the slider) and installs tracing.
//! - **Key items**: [`CarouselHost`](lifecycle::CarouselHost), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 4. Test Support ([`mock`])
//! - **Role**: scripted product sources and recording slider factories.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use recently_viewed::component::{CarouselState, RecentlyViewedCarousel};
//! use recently_viewed::config::CarouselConfig;
//! use recently_viewed::mock::MockProductSource;
//! use recently_viewed::model::Product;
//! use recently_viewed::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut products = MockProductSource::new();
//!     products.expect_fetch("shoe-b").return_product(Product::new("shoe-b", "Shoe B"));
//!     products.expect_fetch("shoe-a").return_product(Product::new("shoe-a", "Shoe A"));
//!
//!     let carousel = RecentlyViewedCarousel::new(
//!         CarouselConfig::default(),
//!         Arc::new(MemoryStore::with_handles(["shoe-a", "shoe-b"])),
//!         products.source(),
//!     );
//!
//!     let activation = carousel.activate().await;
//!     assert_eq!(activation.state(), CarouselState::Populated { slides: 2 });
//! }
//! ```
//!
//! ### Running the binary
//!
//! ```bash
//! RUST_LOG=info cargo run -- render --storage storage.json --store-url https://shop.example
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod render;
pub mod slider;
pub mod storage;
