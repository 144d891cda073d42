//! # Observability & Tracing
//!
//! Structured logging for the carousel, built on `tracing`.
//!
//! ## What Gets Traced
//!
//! - **Activation**: an `activate` span around the whole load sequence, with
//!   `max_products` as a field
//! - **Fetches**: a `fetch_one` span per handle; failures are `DEBUG` events
//!   carrying the cause, since they never reach the user
//! - **Aggregate failure**: an `ERROR` event when the fan-out itself fails
//! - **Slider bootstrap**: a `WARN` event when the slider library is missing or
//!   refuses to construct
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcome only
//! RUST_LOG=info recently-viewed render --storage storage.json
//!
//! # Per-product fetch results
//! RUST_LOG=debug recently-viewed render --storage storage.json
//!
//! # Filter to one module
//! RUST_LOG=recently_viewed::fetcher=debug recently-viewed render --storage storage.json
//! ```
//!
//! With `RUST_LOG=debug` a run where one product is gone looks like:
//!
//! ```text
//! DEBUG activate: Read recent handles max_products=5 stored=2 count=2
//! DEBUG activate: Fetching products count=2
//! DEBUG activate:fetch_one: Fetched handle="shoe-b"
//! DEBUG activate:fetch_one: Fetch failed, skipping handle="shoe-a" error=Unexpected status 404 for shoe-a
//!  INFO activate: Rendering carousel requested=2 rendered=1
//! ```
//!
//! Logs go to stderr so the rendered markup on stdout stays clean.

/// Installs the global subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
