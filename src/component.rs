//! # Recently Viewed Carousel
//!
//! The component ties the stages together. One activation runs them in a
//! fixed order:
//!
//! 1. read the most recent handles from the [`IdentifierStore`]
//! 2. fetch every product concurrently and wait for all of them
//! 3. render the carousel (or a message) into the component's [`IsolatedRoot`]
//! 4. hand the rendered container to the [`SliderFactory`], if one was injected
//!
//! An activation ends in one of two observable states: a populated carousel,
//! or a short message (nothing viewed yet, or loading failed). Activation
//! consumes the component, so there is no way back from either state short of
//! building a new one.
//!
//! ## Empty list vs. nothing fetched
//!
//! The "nothing viewed" message is only shown when the stored list is empty.
//! If handles exist but every fetch fails, the result is a populated carousel
//! with zero slides.

use crate::config::CarouselConfig;
use crate::fetcher::{fetch_all, present, ProductSource};
use crate::render::IsolatedRoot;
use crate::slider::{init_slider, Slider, SliderFactory};
use crate::storage::{read_recent, IdentifierStore};
use std::sync::Arc;
use tracing::{error, info};

/// Element name the component is registered under in a page.
pub const TAG_NAME: &str = "recently-viewed-carousel";

/// How an activation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselState {
    /// Carousel rendered and slider bootstrap attempted.
    Populated { slides: usize },
    /// No handles stored.
    Empty,
    /// The product fan-out failed as a whole.
    Error,
}

/// A carousel instance waiting to be activated.
pub struct RecentlyViewedCarousel {
    config: CarouselConfig,
    store: Arc<dyn IdentifierStore>,
    source: Arc<dyn ProductSource>,
    slider_factory: Option<Arc<dyn SliderFactory>>,
    root: IsolatedRoot,
}

impl RecentlyViewedCarousel {
    pub fn new(
        config: CarouselConfig,
        store: Arc<dyn IdentifierStore>,
        source: Arc<dyn ProductSource>,
    ) -> Self {
        Self {
            config,
            store,
            source,
            slider_factory: None,
            root: IsolatedRoot::new(),
        }
    }

    /// Injects the slider library. Without one the carousel stays static.
    pub fn with_slider_factory(mut self, factory: Arc<dyn SliderFactory>) -> Self {
        self.slider_factory = Some(factory);
        self
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Runs the load sequence once and returns the rendered result.
    #[tracing::instrument(name = "activate", skip(self), fields(max_products = self.config.max_products()))]
    pub async fn activate(mut self) -> Activation {
        let handles = read_recent(self.store.as_ref(), self.config.max_products());
        if handles.is_empty() {
            info!("No recently viewed products");
            self.root.render_empty();
            return Activation::new(self.root, CarouselState::Empty, handles, None);
        }

        match fetch_all(Arc::clone(&self.source), &handles).await {
            Ok(fetched) => {
                let products = present(fetched);
                info!(requested = handles.len(), rendered = products.len(), "Rendering carousel");
                self.root.render(&products, &self.config);
                let slider = init_slider(self.slider_factory.as_deref(), &self.root);
                let state = CarouselState::Populated {
                    slides: products.len(),
                };
                Activation::new(self.root, state, handles, slider)
            }
            Err(e) => {
                error!(error = %e, "Error fetching recently viewed products");
                self.root.render_error();
                Activation::new(self.root, CarouselState::Error, handles, None)
            }
        }
    }
}

/// The outcome of [`RecentlyViewedCarousel::activate`].
#[derive(Debug)]
pub struct Activation {
    root: IsolatedRoot,
    state: CarouselState,
    requested: Vec<String>,
    slider: Option<Box<dyn Slider>>,
}

impl Activation {
    fn new(
        root: IsolatedRoot,
        state: CarouselState,
        requested: Vec<String>,
        slider: Option<Box<dyn Slider>>,
    ) -> Self {
        Self {
            root,
            state,
            requested,
            slider,
        }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn root(&self) -> &IsolatedRoot {
        &self.root
    }

    pub fn inner_html(&self) -> &str {
        self.root.inner_html()
    }

    /// Handles that were fetched, in request order (most recent first).
    pub fn requested_handles(&self) -> &[String] {
        &self.requested
    }

    /// The slider, if one was constructed.
    pub fn slider(&self) -> Option<&dyn Slider> {
        self.slider.as_deref()
    }
}
