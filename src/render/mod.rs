//! # Renderer
//!
//! The component draws into an [`IsolatedRoot`]: a private render target whose
//! whole content is swapped on every render pass. Styles are scoped to the
//! root's host with `:host` rules and the fixed class names below are only
//! looked up inside the root, so nothing leaks in or out.
//!
//! Exactly one of [`IsolatedRoot::render`], [`IsolatedRoot::render_empty`] and
//! [`IsolatedRoot::render_error`] runs per activation.

pub mod markup;
mod styles;

pub use styles::{style_block, HOST_STYLES};

use crate::config::CarouselConfig;
use crate::model::Product;
use tracing::debug;

/// Carousel viewport; the slider is constructed against it.
pub const CONTAINER_CLASS: &str = "swiper-container";
pub const WRAPPER_CLASS: &str = "swiper-wrapper";
pub const SLIDE_CLASS: &str = "swiper-slide";
pub const TITLE_CLASS: &str = "product-title";
pub const PAGINATION_CLASS: &str = "swiper-pagination";
pub const PREV_CLASS: &str = "swiper-button-prev";
pub const NEXT_CLASS: &str = "swiper-button-next";

/// Shown when nothing has been viewed yet.
pub const EMPTY_MESSAGE: &str = "No recently viewed products found.";
/// Shown when the product fan-out failed as a whole.
pub const ERROR_MESSAGE: &str = "Failed to load recently viewed products.";

/// Which render pass produced the root's current content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    Carousel { slides: usize },
    Empty,
    Error,
}

/// Handle to an element inside an [`IsolatedRoot`], identified by class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef {
    class: String,
}

impl ElementRef {
    pub fn class(&self) -> &str {
        &self.class
    }

    /// CSS selector matching this element.
    pub fn selector(&self) -> String {
        format!(".{}", self.class)
    }
}

/// A style-encapsulated render target owned by one component instance.
#[derive(Debug, Default)]
pub struct IsolatedRoot {
    content: String,
    last_render: Option<RenderKind>,
}

impl IsolatedRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of the root.
    pub fn inner_html(&self) -> &str {
        &self.content
    }

    pub fn last_render(&self) -> Option<RenderKind> {
        self.last_render
    }

    /// Renders one slide per product plus the scoped styles.
    pub fn render(&mut self, products: &[Product], config: &CarouselConfig) {
        let html = markup::carousel(products, config);
        self.commit(html, RenderKind::Carousel {
            slides: products.len(),
        });
    }

    pub fn render_empty(&mut self) {
        self.commit(markup::message(EMPTY_MESSAGE), RenderKind::Empty);
    }

    pub fn render_error(&mut self) {
        self.commit(markup::message(ERROR_MESSAGE), RenderKind::Error);
    }

    /// First element in the committed content carrying `class`.
    ///
    /// Only sees what has been committed: before a render pass this is
    /// always `None`.
    pub fn query(&self, class: &str) -> Option<ElementRef> {
        markup::has_class(&self.content, class).then(|| ElementRef {
            class: class.to_string(),
        })
    }

    fn commit(&mut self, html: String, kind: RenderKind) {
        debug!(?kind, bytes = html.len(), "Render");
        self.content = html;
        self.last_render = Some(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_before_render_finds_nothing() {
        let root = IsolatedRoot::new();
        assert!(root.query(CONTAINER_CLASS).is_none());
        assert_eq!(root.last_render(), None);
    }

    #[test]
    fn test_render_replaces_whole_content() {
        let mut root = IsolatedRoot::new();
        root.render(&[Product::new("p1", "P1")], &CarouselConfig::default());
        assert!(root.query(CONTAINER_CLASS).is_some());

        root.render_error();
        assert_eq!(root.inner_html(), format!("<p>{ERROR_MESSAGE}</p>"));
        assert!(root.query(CONTAINER_CLASS).is_none());
        assert_eq!(root.last_render(), Some(RenderKind::Error));
    }

    #[test]
    fn test_empty_message() {
        let mut root = IsolatedRoot::new();
        root.render_empty();
        assert_eq!(root.inner_html(), "<p>No recently viewed products found.</p>");
        assert_eq!(root.last_render(), Some(RenderKind::Empty));
    }

    #[test]
    fn test_element_ref_selector() {
        let mut root = IsolatedRoot::new();
        root.render(&[], &CarouselConfig::default());
        let next = root.query(NEXT_CLASS).unwrap();
        assert_eq!(next.selector(), ".swiper-button-next");
        assert_eq!(root.last_render(), Some(RenderKind::Carousel { slides: 0 }));
    }
}
