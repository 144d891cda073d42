//! Markup builders for the isolated root. Pure functions over product data.

use super::{
    style_block, CONTAINER_CLASS, NEXT_CLASS, PAGINATION_CLASS, PREV_CLASS, SLIDE_CLASS,
    TITLE_CLASS, WRAPPER_CLASS,
};
use crate::config::CarouselConfig;
use crate::model::Product;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

/// Full carousel document: scoped styles, slides, and the slider's control
/// elements. The pagination container is always present; whether it is
/// visible is decided by the style block.
pub fn carousel(products: &[Product], config: &CarouselConfig) -> String {
    let slides: String = products.iter().map(slide).collect();

    format!(
        "{styles}\n\
         <div class=\"{CONTAINER_CLASS}\">\n\
         \x20 <div class=\"{WRAPPER_CLASS}\">{slides}\n\
         \x20 </div>\n\
         \x20 <div class=\"{PAGINATION_CLASS}\"></div>\n\
         \x20 <div class=\"{PREV_CLASS}\"></div>\n\
         \x20 <div class=\"{NEXT_CLASS}\"></div>\n\
         </div>\n",
        styles = style_block(config),
    )
}

/// One slide: a link to the product page wrapping its first image and title.
pub fn slide(product: &Product) -> String {
    let title_attr = attr(&product.title);
    format!(
        "\n    <div class=\"{SLIDE_CLASS}\">\n\
         \x20     <a href=\"{href}\" class=\"{TITLE_CLASS}\" title=\"{title_attr}\">\n\
         \x20       <img src=\"{src}\" alt=\"{title_attr}\" />\n\
         \x20       <span>{title}</span>\n\
         \x20     </a>\n\
         \x20   </div>",
        href = attr(&product.page_path()),
        src = attr(product.primary_image_src()),
        title = text(&product.title),
    )
}

/// A single short paragraph, used for the empty and error states.
pub fn message(body: &str) -> String {
    format!("<p>{}</p>", text(body))
}

/// Whether any `class="..."` attribute in `html` lists `class`.
pub fn has_class(html: &str, class: &str) -> bool {
    html.split("class=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .any(|value| value.split_whitespace().any(|c| c == class))
}
