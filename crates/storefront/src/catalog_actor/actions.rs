//! Messages understood by the Catalog actor.
//!
//! Requests are answered with the [`CatalogReply`] variant of the same name. The only
//! event is the completion of the fetch started in `on_start`.
use crate::api::ApiError;
use crate::model::{Product, ProductId};
use std::sync::Arc;

/// Load state of the catalog. `Ready` and `Failed` are final.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Ready(Arc<[Product]>),
    Failed(String),
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone)]
pub enum CatalogRequest {
    /// Current state, answered immediately.
    Status,
    /// Answered once the state has left `Loading`.
    Settled,
    Products,
    Find(ProductId),
}

#[derive(Debug, Clone)]
pub enum CatalogReply {
    Status(CatalogStatus),
    Products(Arc<[Product]>),
    Product(Product),
}

#[derive(Debug)]
pub enum CatalogEvent {
    Loaded(Result<Vec<Product>, ApiError>),
}
