//! # Slider Bootstrap
//!
//! Interactivity comes from a slider library the component does not own. The
//! library is reached through the [`SliderFactory`] capability injected at
//! construction; when none is available the rendered markup stays as a plain,
//! static list.
//!
//! Bootstrap runs strictly after the render pass has committed, since element
//! lookups only see committed content.

mod swiper;

pub use swiper::{SwiperAdapter, SwiperSlider, OPTIONS_ATTRIBUTE};

use crate::error::SliderError;
use crate::render::{
    ElementRef, IsolatedRoot, CONTAINER_CLASS, NEXT_CLASS, PAGINATION_CLASS, PREV_CLASS,
};
use tracing::{debug, warn};

/// Slides visible at a viewport width of at least `min_width` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub slides_per_view: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationOptions {
    pub el: ElementRef,
    pub clickable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOptions {
    pub next_el: ElementRef,
    pub prev_el: ElementRef,
}

/// Library-neutral slider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderOptions {
    pub slides_per_view: u32,
    /// Gap between slides, in pixels.
    pub space_between: u32,
    pub pagination: Option<PaginationOptions>,
    pub navigation: Option<NavigationOptions>,
    /// Ordered by ascending `min_width`.
    pub breakpoints: Vec<Breakpoint>,
}

impl SliderOptions {
    /// The carousel's settings, bound to the control elements found in `root`.
    ///
    /// One slide by default, two from 640px, three from 1024px. Controls
    /// missing from the root are left unbound.
    pub fn for_root(root: &IsolatedRoot) -> Self {
        let pagination = root.query(PAGINATION_CLASS).map(|el| PaginationOptions {
            el,
            clickable: true,
        });
        let navigation = match (root.query(NEXT_CLASS), root.query(PREV_CLASS)) {
            (Some(next_el), Some(prev_el)) => Some(NavigationOptions { next_el, prev_el }),
            _ => None,
        };

        Self {
            slides_per_view: 1,
            space_between: 10,
            pagination,
            navigation,
            breakpoints: vec![
                Breakpoint {
                    min_width: 640,
                    slides_per_view: 2,
                },
                Breakpoint {
                    min_width: 1024,
                    slides_per_view: 3,
                },
            ],
        }
    }

    /// Slides visible at `viewport_width`.
    pub fn slides_at(&self, viewport_width: u32) -> u32 {
        self.breakpoints
            .iter()
            .filter(|b| viewport_width >= b.min_width)
            .last()
            .map(|b| b.slides_per_view)
            .unwrap_or(self.slides_per_view)
    }
}

/// A live slider instance.
pub trait Slider: std::fmt::Debug + Send + Sync {
    /// Element the slider was constructed against.
    fn container(&self) -> &ElementRef;

    /// Markup a host page needs to boot the slider, if the adapter emits any.
    fn init_script(&self) -> Option<String>;
}

/// Capability to construct sliders, implemented by library adapters.
pub trait SliderFactory: Send + Sync {
    fn create(
        &self,
        container: &ElementRef,
        options: &SliderOptions,
    ) -> Result<Box<dyn Slider>, SliderError>;
}

/// Constructs a slider over the rendered carousel in `root`.
///
/// Never fails: a missing factory, a missing container, or a construction
/// error is logged as a warning and leaves the static markup in place.
pub fn init_slider(
    factory: Option<&dyn SliderFactory>,
    root: &IsolatedRoot,
) -> Option<Box<dyn Slider>> {
    let Some(factory) = factory else {
        warn!("Slider library is not loaded.");
        return None;
    };

    let result = root
        .query(CONTAINER_CLASS)
        .ok_or_else(|| SliderError::MissingElement(CONTAINER_CLASS.to_string()))
        .and_then(|container| factory.create(&container, &SliderOptions::for_root(root)));

    match result {
        Ok(slider) => {
            debug!(container = %slider.container().selector(), "Slider initialised");
            Some(slider)
        }
        Err(e) => {
            warn!(error = %e, "Slider initialisation skipped");
            None
        }
    }
}
