//! # Host Lifecycle
//!
//! A component never picks its own collaborators. The host (a page, or the
//! `recently-viewed` binary) decides which storage, product source, and slider
//! library are available and injects them:
//!
//! ```rust,ignore
//! let host = CarouselHost::new(HostSettings {
//!     storage_path: "storage.json".into(),
//!     attributes,        // data-max-products, data-store-url
//!     slider: true,      // SwiperAdapter available
//!     show_pagination: false,
//! });
//!
//! let activation = host.carousel().activate().await;
//! print!("{}", host.document(&activation));
//! ```
//!
//! Each call to [`CarouselHost::carousel`] builds a fresh component, which is
//! the native equivalent of reloading the page.
//!
//! The [`setup_tracing`] function initializes structured logging; see the
//! [`tracing`] module for what is recorded at each level.

pub mod host;
pub mod tracing;

pub use self::host::*;
pub use self::tracing::*;
