use crate::config::CarouselConfig;
use html_escape::encode_double_quoted_attribute;

/// Presentation rules scoped to the component host.
pub const HOST_STYLES: &str = r#"
  :host {
    display: block;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen,
      Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
  }
  .swiper-container {
    width: 100%;
    padding: 1rem 0;
  }
  .swiper-slide {
    width: 180px;
    text-align: center;
    user-select: none;
  }
  .swiper-slide img {
    width: 100%;
    border-radius: 8px;
    object-fit: cover;
  }
  .product-title {
    margin-top: 0.5rem;
    font-size: 0.9rem;
    color: #333;
    text-decoration: none;
    display: block;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
  }
  .swiper-button-next:after, .swiper-button-prev:after {
    color: #121212;
  }
"#;

const HIDE_PAGINATION: &str = "  .swiper-pagination {\n    display: none;\n  }\n";

/// `<style>` block plus the slider stylesheet link.
pub fn style_block(config: &CarouselConfig) -> String {
    let mut css = String::from(HOST_STYLES);
    if !config.show_pagination {
        css.push_str(HIDE_PAGINATION);
    }

    let mut block = format!("<style>{css}</style>");
    if let Some(href) = &config.stylesheet_href {
        block.push_str(&format!(
            "\n<link href=\"{}\" rel=\"stylesheet\" />",
            encode_double_quoted_attribute(href)
        ));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_hidden_by_default() {
        let block = style_block(&CarouselConfig::default());
        assert!(block.contains(".swiper-pagination {\n    display: none;"));
        assert!(block.contains("swiper-bundle.min.css"));
    }

    #[test]
    fn test_pagination_toggle_and_no_stylesheet() {
        let config = CarouselConfig::default()
            .with_show_pagination(true)
            .with_stylesheet_href(None);
        let block = style_block(&config);
        assert!(!block.contains(".swiper-pagination"));
        assert!(!block.contains("<link"));
    }
}
