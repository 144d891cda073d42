//! # Carousel Configuration
//!
//! Settings are read once, when the component is activated. In a page they
//! come from the element's data attributes (`data-max-products`,
//! `data-store-url`); the binary builds the same attribute map from its
//! command line so both hosts share one parsing path.

use std::collections::HashMap;

/// Product count used when `max-products` is missing or not a positive integer.
pub const DEFAULT_MAX_PRODUCTS: usize = 5;

/// Stylesheet shipped by the slider library.
pub const DEFAULT_STYLESHEET_HREF: &str =
    "https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.css";

/// Runtime configuration of one carousel instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Upper bound on rendered products; always positive, so only settable
    /// through [`CarouselConfig::with_max_products`].
    max_products: usize,
    /// Storefront origin the product paths are appended to. Empty means
    /// same-origin relative URLs.
    pub store_url: String,
    /// Slider stylesheet linked from the isolated root, if any.
    pub stylesheet_href: Option<String>,
    /// Whether the pagination dots are shown. The container is emitted either way.
    pub show_pagination: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            max_products: DEFAULT_MAX_PRODUCTS,
            store_url: String::new(),
            stylesheet_href: Some(DEFAULT_STYLESHEET_HREF.to_string()),
            show_pagination: false,
        }
    }
}

impl CarouselConfig {
    /// Builds a configuration from element attributes.
    ///
    /// Accepts both the `data-` prefixed names and the bare dataset keys.
    /// Unknown attributes are ignored.
    pub fn from_attributes(attributes: &HashMap<String, String>) -> Self {
        let lookup = |name: &str| {
            attributes
                .get(&format!("data-{name}"))
                .or_else(|| attributes.get(name))
        };

        let mut config = Self::default();
        if let Some(raw) = lookup("max-products") {
            config.max_products = parse_max_products(raw);
        }
        if let Some(url) = lookup("store-url") {
            config.store_url = url.clone();
        }
        config
    }

    /// Sets the maximum product count, applying the same fallback as attributes.
    pub fn with_max_products(mut self, raw: &str) -> Self {
        self.max_products = parse_max_products(raw);
        self
    }

    pub fn max_products(&self) -> usize {
        self.max_products
    }

    pub fn with_store_url(mut self, url: impl Into<String>) -> Self {
        self.store_url = url.into();
        self
    }

    pub fn with_show_pagination(mut self, show: bool) -> Self {
        self.show_pagination = show;
        self
    }

    pub fn with_stylesheet_href(mut self, href: Option<String>) -> Self {
        self.stylesheet_href = href;
        self
    }
}

/// Parses a product count the way a leading-integer parse would: leading
/// whitespace and an optional sign, then digits, anything after is ignored.
/// Zero, negative, and unparsable values fall back to [`DEFAULT_MAX_PRODUCTS`];
/// counts too large for `usize` saturate.
pub fn parse_max_products(raw: &str) -> usize {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    // Also covers an empty digit run.
    if negative || digits.bytes().all(|b| b == b'0') {
        return DEFAULT_MAX_PRODUCTS;
    }
    digits.parse::<usize>().unwrap_or(usize::MAX)
}
