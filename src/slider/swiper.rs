//! Adapter for the Swiper carousel library.
//!
//! Swiper is constructed in the page as `new Swiper(container, options)`. The
//! adapter produces that call's arguments as a JSON block so a host page can
//! boot it; selectors are meant to be resolved inside the isolated root.

use super::{Slider, SliderFactory, SliderOptions};
use crate::error::SliderError;
use crate::render::ElementRef;
use serde::Serialize;
use std::collections::BTreeMap;

/// Attribute marking the emitted options block.
pub const OPTIONS_ATTRIBUTE: &str = "data-swiper-options";

#[derive(Debug, Default, Clone)]
pub struct SwiperAdapter;

impl SwiperAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Serialize)]
struct SwiperInit {
    container: String,
    options: SwiperParams,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SwiperParams {
    slides_per_view: u32,
    space_between: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<SwiperPagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    navigation: Option<SwiperNavigation>,
    breakpoints: BTreeMap<u32, SwiperBreakpoint>,
}

#[derive(Debug, Serialize)]
struct SwiperPagination {
    el: String,
    clickable: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SwiperNavigation {
    next_el: String,
    prev_el: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SwiperBreakpoint {
    slides_per_view: u32,
}

impl SwiperParams {
    fn from_options(options: &SliderOptions) -> Self {
        Self {
            slides_per_view: options.slides_per_view,
            space_between: options.space_between,
            pagination: options.pagination.as_ref().map(|p| SwiperPagination {
                el: p.el.selector(),
                clickable: p.clickable,
            }),
            navigation: options.navigation.as_ref().map(|n| SwiperNavigation {
                next_el: n.next_el.selector(),
                prev_el: n.prev_el.selector(),
            }),
            breakpoints: options
                .breakpoints
                .iter()
                .map(|b| {
                    (
                        b.min_width,
                        SwiperBreakpoint {
                            slides_per_view: b.slides_per_view,
                        },
                    )
                })
                .collect(),
        }
    }
}

/// A Swiper instance described by its constructor arguments.
#[derive(Debug, Clone)]
pub struct SwiperSlider {
    container: ElementRef,
    init_json: String,
}

impl SwiperSlider {
    /// `{"container": ..., "options": ...}` as passed to the constructor.
    pub fn init_json(&self) -> &str {
        &self.init_json
    }
}

impl Slider for SwiperSlider {
    fn container(&self) -> &ElementRef {
        &self.container
    }

    fn init_script(&self) -> Option<String> {
        Some(format!(
            "<script type=\"application/json\" {OPTIONS_ATTRIBUTE}>{}</script>",
            // Keep a literal "</script>" inside a string from closing the block.
            self.init_json.replace("</", "<\\/")
        ))
    }
}

impl SwiperAdapter {
    /// Describes the Swiper instance for `container` without boxing it.
    pub fn build(
        &self,
        container: &ElementRef,
        options: &SliderOptions,
    ) -> Result<SwiperSlider, SliderError> {
        let init = SwiperInit {
            container: container.selector(),
            options: SwiperParams::from_options(options),
        };
        let init_json = serde_json::to_string(&init)
            .map_err(|e| SliderError::Construction(e.to_string()))?;

        Ok(SwiperSlider {
            container: container.clone(),
            init_json,
        })
    }
}

impl SliderFactory for SwiperAdapter {
    fn create(
        &self,
        container: &ElementRef,
        options: &SliderOptions,
    ) -> Result<Box<dyn Slider>, SliderError> {
        Ok(Box::new(self.build(container, options)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarouselConfig;
    use crate::render::{IsolatedRoot, CONTAINER_CLASS};
    use serde_json::{json, Value};

    #[test]
    fn test_emits_swiper_constructor_arguments() {
        let mut root = IsolatedRoot::new();
        root.render(&[], &CarouselConfig::default());
        let container = root.query(CONTAINER_CLASS).unwrap();

        let slider = SwiperAdapter::new()
            .build(&container, &SliderOptions::for_root(&root))
            .unwrap();
        let value: Value = serde_json::from_str(slider.init_json()).unwrap();

        assert_eq!(
            value,
            json!({
                "container": ".swiper-container",
                "options": {
                    "slidesPerView": 1,
                    "spaceBetween": 10,
                    "pagination": { "el": ".swiper-pagination", "clickable": true },
                    "navigation": {
                        "nextEl": ".swiper-button-next",
                        "prevEl": ".swiper-button-prev"
                    },
                    "breakpoints": {
                        "640": { "slidesPerView": 2 },
                        "1024": { "slidesPerView": 3 }
                    }
                }
            })
        );
    }

    #[test]
    fn test_init_script_wraps_and_escapes_json() {
        let mut root = IsolatedRoot::new();
        root.render(&[], &CarouselConfig::default());
        let container = root.query(CONTAINER_CLASS).unwrap();
        let slider = SwiperAdapter::new()
            .build(&container, &SliderOptions::for_root(&root))
            .unwrap();

        let script = slider.init_script().unwrap();
        assert_eq!(
            script,
            format!(
                "<script type=\"application/json\" {OPTIONS_ATTRIBUTE}>{}</script>",
                slider.init_json()
            )
        );
        assert_eq!(slider.container().class(), CONTAINER_CLASS);
    }
}
