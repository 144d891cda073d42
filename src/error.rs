//! # Carousel Errors
//!
//! Error types for every stage of a carousel activation. Each concern gets its
//! own enum so callers can match on what actually went wrong.
//!
//! Most of these never reach the rendered output: individual fetch failures
//! are absorbed by the fetcher and storage problems read as an empty list.
//! Only [`CarouselError::Join`] changes what the user sees.

use thiserror::Error;

/// Why a single product could not be fetched.
///
/// Always swallowed by [`fetch_all`](crate::fetcher::fetch_all); exposed so
/// [`ProductSource`](crate::fetcher::ProductSource) implementations can use `?`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed for {handle}: {source}")]
    Transport {
        handle: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status {status} for {handle}")]
    Status { handle: String, status: u16 },

    #[error("Malformed product body for {handle}: {source}")]
    Decode {
        handle: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by an [`IdentifierStore`](crate::storage::IdentifierStore).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage file is not a JSON object of strings: {0}")]
    Format(#[from] serde_json::Error),
}

/// Errors raised while constructing a slider.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SliderError {
    /// The rendered root has no element matching the selector.
    #[error("Slider element not found: .{0}")]
    MissingElement(String),

    #[error("Slider construction failed: {0}")]
    Construction(String),
}

/// Aggregate failures of a carousel activation.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// A fetch task did not settle normally (panic or runtime cancellation).
    #[error("Fetch task for {handle} did not complete: {reason}")]
    Join { handle: String, reason: String },
}
