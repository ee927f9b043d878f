//! # Storefront API
//!
//! The two remote calls the shop makes: read the catalog and create an order. Actors
//! reach the network only through [`StorefrontApi`], so tests can substitute a scripted
//! implementation for [`HttpStorefrontApi`].
use crate::model::{OrderPayload, OrderReceipt, Product};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub mod http;

pub use http::HttpStorefrontApi;

/// Transport-level failures.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `GET <products_url>`.
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `POST <order_url>`. Any response whose body parses is a receipt, whatever its status.
    async fn place_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, ApiError>;
}

pub type SharedApi = Arc<dyn StorefrontApi>;
