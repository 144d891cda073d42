//! HTTP [`ProductSource`] against a storefront's public product JSON endpoint.

use super::ProductSource;
use crate::error::FetchError;
use crate::model::{Product, ProductEnvelope};
use async_trait::async_trait;

/// Fetches `GET {base_url}/products/{handle}.json`.
///
/// The base URL is joined literally, without normalising slashes or encoding
/// the handle. No timeout is configured on the default client.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProductSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn product_url(&self, handle: &str) -> String {
        format!("{}/products/{}.json", self.base_url, handle)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn try_fetch(&self, handle: &str) -> Result<Product, FetchError> {
        let url = self.product_url(handle);
        let transport = |source| FetchError::Transport {
            handle: handle.to_string(),
            source,
        };

        let resp = self.http.get(&url).send().await.map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                handle: handle.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(transport)?;
        let envelope: ProductEnvelope =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
                handle: handle.to_string(),
                source,
            })?;
        Ok(envelope.product)
    }
}
