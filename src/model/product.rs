use serde::{Deserialize, Serialize};

/// A product as served by the storefront's public `products/{handle}.json`
/// endpoint.
///
/// Only the attributes the carousel renders are kept; unknown fields in the
/// payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `handle` - URL-safe unique identifier
    /// * `title` - Display title
    pub fn new(handle: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            title: title.into(),
            images: Vec::new(),
        }
    }

    /// Adds an image, keeping insertion order.
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.images.push(ProductImage { src: src.into() });
        self
    }

    /// Source of the first image, or `""` when the product has none.
    pub fn primary_image_src(&self) -> &str {
        self.images.first().map(|i| i.src.as_str()).unwrap_or("")
    }

    /// Storefront-relative page path for this product.
    pub fn page_path(&self) -> String {
        format!("/products/{}", self.handle)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub src: String,
}

/// Response body wrapper: the endpoint nests the record under `product`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEnvelope {
    pub product: Product,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_ignores_unknown_fields_and_defaults_images() {
        let body = r#"{"product":{"id":42,"handle":"shoe-a","title":"Shoe A","vendor":"x"}}"#;
        let envelope: ProductEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.product.handle, "shoe-a");
        assert!(envelope.product.images.is_empty());
        assert_eq!(envelope.product.primary_image_src(), "");
    }

    #[test]
    fn test_primary_image_is_first() {
        let product = Product::new("p1", "P1")
            .with_image("https://cdn.example/1.jpg")
            .with_image("https://cdn.example/2.jpg");
        assert_eq!(product.primary_image_src(), "https://cdn.example/1.jpg");
        assert_eq!(product.page_path(), "/products/p1");
    }

    #[test]
    fn test_envelope_without_product_is_rejected() {
        let result = serde_json::from_str::<ProductEnvelope>(r#"{"products":[]}"#);
        assert!(result.is_err());
    }
}
