//! `reqwest` implementation of [`StorefrontApi`].
use super::{ApiError, StorefrontApi};
use crate::config::StorefrontConfig;
use crate::model::{OrderPayload, OrderReceipt, OrderResponse, Product};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: reqwest::Client,
    products_url: String,
    order_url: String,
}

impl HttpStorefrontApi {
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            products_url: config.products_url.clone(),
            order_url: config.order_url.clone(),
        })
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    #[instrument(skip(self), fields(url = %self.products_url))]
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.client.get(&self.products_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        let products = parse_catalog(&body)?;
        debug!(count = products.len(), "Catalog fetched");
        Ok(products)
    }

    #[instrument(skip(self, payload), fields(url = %self.order_url, product = %payload.product_ids))]
    async fn place_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, ApiError> {
        debug!(?payload, "Posting order");
        let response = self.client.post(&self.order_url).json(payload).send().await?;
        let http_status = response.status().as_u16();
        let body = response.bytes().await?;
        let body = parse_order_response(&body)?;
        debug!(http_status, ?body, "Order response");
        Ok(OrderReceipt { http_status, body })
    }
}

/// Unwraps `{ data: { data: [...] } }`.
///
/// Only a body that is not JSON at all is an error. A missing level or a non-array
/// list means no products, and entries that do not parse as a [`Product`] are skipped.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<Product>, ApiError> {
    let envelope: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let Some(entries) = envelope
        .get("data")
        .and_then(|page| page.get("data"))
        .and_then(Value::as_array)
    else {
        debug!("Catalog response carries no product list");
        return Ok(Vec::new());
    };

    let products = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            Product::deserialize(entry)
                .map_err(|e| warn!(index, error = %e, "Skipping malformed product"))
                .ok()
        })
        .collect();
    Ok(products)
}

pub fn parse_order_response(body: &[u8]) -> Result<OrderResponse, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}
