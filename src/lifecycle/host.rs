use crate::component::{Activation, RecentlyViewedCarousel, TAG_NAME};
use crate::config::CarouselConfig;
use crate::fetcher::{HttpProductSource, ProductSource};
use crate::slider::{SliderFactory, SwiperAdapter};
use crate::storage::{IdentifierStore, JsonFileStore};
use html_escape::encode_double_quoted_attribute;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Everything a native host needs to stand up one carousel.
#[derive(Debug, Clone)]
pub struct HostSettings {
    /// JSON file standing in for the page's local storage.
    pub storage_path: PathBuf,
    /// Element attributes, as they would appear on the tag.
    pub attributes: HashMap<String, String>,
    /// Whether the slider library is available to the page.
    pub slider: bool,
    pub show_pagination: bool,
}

/// Wires the native collaborators into a carousel and renders host pages.
///
/// `CarouselHost` plays the role of the page: it owns the storage, the
/// product source, and (optionally) the slider library, and hands them to
/// each component it creates.
///
/// # Example
///
/// ```ignore
/// let host = CarouselHost::new(settings);
/// let activation = host.carousel().activate().await;
/// println!("{}", host.document(&activation));
/// ```
pub struct CarouselHost {
    config: CarouselConfig,
    store: Arc<dyn IdentifierStore>,
    source: Arc<dyn ProductSource>,
    slider_factory: Option<Arc<dyn SliderFactory>>,
}

impl CarouselHost {
    pub fn new(settings: HostSettings) -> Self {
        let config = CarouselConfig::from_attributes(&settings.attributes)
            .with_show_pagination(settings.show_pagination);
        let store: Arc<dyn IdentifierStore> = Arc::new(JsonFileStore::new(settings.storage_path));
        let source: Arc<dyn ProductSource> = Arc::new(HttpProductSource::new(config.store_url.clone()));
        let slider_factory: Option<Arc<dyn SliderFactory>> = settings
            .slider
            .then(|| Arc::new(SwiperAdapter::new()) as Arc<dyn SliderFactory>);

        info!(
            max_products = config.max_products(),
            store_url = %config.store_url,
            slider = slider_factory.is_some(),
            "Host configured"
        );
        Self::from_parts(config, store, source, slider_factory)
    }

    /// Builds a host from already constructed collaborators.
    pub fn from_parts(
        config: CarouselConfig,
        store: Arc<dyn IdentifierStore>,
        source: Arc<dyn ProductSource>,
        slider_factory: Option<Arc<dyn SliderFactory>>,
    ) -> Self {
        Self {
            config,
            store,
            source,
            slider_factory,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn IdentifierStore {
        self.store.as_ref()
    }

    /// A fresh, not yet activated component.
    pub fn carousel(&self) -> RecentlyViewedCarousel {
        let carousel = RecentlyViewedCarousel::new(
            self.config.clone(),
            Arc::clone(&self.store),
            Arc::clone(&self.source),
        );
        match &self.slider_factory {
            Some(factory) => carousel.with_slider_factory(Arc::clone(factory)),
            None => carousel,
        }
    }

    /// The custom element with its isolated root as a declarative shadow root,
    /// followed by the slider boot block when a slider was constructed.
    pub fn document(&self, activation: &Activation) -> String {
        let mut html = format!(
            "<{TAG_NAME} data-max-products=\"{}\" data-store-url=\"{}\">\n\
             <template shadowrootmode=\"open\">\n{}\n</template>\n\
             </{TAG_NAME}>\n",
            self.config.max_products(),
            encode_double_quoted_attribute(&self.config.store_url),
            activation.inner_html(),
        );
        if let Some(script) = activation.slider().and_then(|s| s.init_script()) {
            html.push_str(&script);
            html.push('\n');
        }
        html
    }
}
