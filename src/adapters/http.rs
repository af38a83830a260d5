use crate::domain::model::{Product, ProductId, Stock};
use crate::domain::ports::{Catalog, ConfigProvider};
use crate::utils::error::{CartError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Catalog/stock service spoken to over JSON HTTP:
/// `GET {base}/stock/{id}` and `GET {base}/products/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.request_timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.api_endpoint().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if status == StatusCode::NOT_FOUND {
            return Err(CartError::NotFound { resource: url });
        }
        if !status.is_success() {
            return Err(CartError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn stock(&self, product_id: ProductId) -> Result<Stock> {
        self.get_json(&format!("/stock/{}", product_id)).await
    }

    async fn product(&self, product_id: ProductId) -> Result<Product> {
        self.get_json(&format!("/products/{}", product_id)).await
    }
}
