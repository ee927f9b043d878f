//! Shared fixtures: a scripted in-memory API and a small catalog.
#![allow(dead_code)]

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use storefront::api::{ApiError, StorefrontApi};
use storefront::config::StorefrontConfig;
use storefront::model::{OrderPayload, OrderReceipt, Product};
use tokio::sync::Notify;

pub enum CatalogScript {
    Products(Vec<Product>),
    Status(u16),
    Malformed,
}

pub enum OrderScript {
    Respond(u16, Value),
    TransportError,
}

/// `StorefrontApi` answering from scripts, recording every order payload.
pub struct ScriptedApi {
    catalog: CatalogScript,
    orders: Mutex<VecDeque<OrderScript>>,
    payloads: Mutex<Vec<OrderPayload>>,
    catalog_calls: AtomicUsize,
    catalog_gate: Option<Arc<Notify>>,
    order_gate: Option<Arc<Notify>>,
}

impl ScriptedApi {
    pub fn new(catalog: CatalogScript) -> Self {
        Self {
            catalog,
            orders: Mutex::new(VecDeque::new()),
            payloads: Mutex::new(Vec::new()),
            catalog_calls: AtomicUsize::new(0),
            catalog_gate: None,
            order_gate: None,
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self::new(CatalogScript::Products(products))
    }

    pub fn respond(self, http_status: u16, body: Value) -> Self {
        self.orders
            .lock()
            .unwrap()
            .push_back(OrderScript::Respond(http_status, body));
        self
    }

    pub fn fail_transport(self) -> Self {
        self.orders.lock().unwrap().push_back(OrderScript::TransportError);
        self
    }

    /// The catalog fetch blocks until the returned `Notify` is signalled.
    pub fn gate_catalog(&mut self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.catalog_gate = Some(gate.clone());
        gate
    }

    /// Every order request blocks until the returned `Notify` is signalled once for it.
    pub fn gate_orders(&mut self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.order_gate = Some(gate.clone());
        gate
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    pub fn order_calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    pub fn payloads(&self) -> Vec<OrderPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorefrontApi for ScriptedApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.catalog_gate {
            gate.notified().await;
        }
        match &self.catalog {
            CatalogScript::Products(products) => Ok(products.clone()),
            CatalogScript::Status(code) => Err(ApiError::Status(*code)),
            CatalogScript::Malformed => Err(ApiError::Decode("expected value".into())),
        }
    }

    async fn place_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, ApiError> {
        self.payloads.lock().unwrap().push(payload.clone());
        if let Some(gate) = &self.order_gate {
            gate.notified().await;
        }
        let script = self.orders.lock().unwrap().pop_front();
        match script {
            Some(OrderScript::Respond(http_status, body)) => Ok(OrderReceipt {
                http_status,
                body: serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?,
            }),
            Some(OrderScript::TransportError) | None => {
                Err(ApiError::Decode("connection reset".into()))
            }
        }
    }
}

pub fn panjabi() -> Product {
    Product::new(1, "Cotton Panjabi", Decimal::new(49900, 2), 12).with_category("Menswear")
}

pub fn saree() -> Product {
    Product::new(2, "Silk Saree", Decimal::from(1200), 3)
        .with_category("Womenswear")
        .with_discount(Decimal::from(100))
        .with_image("saree.jpg")
}

pub fn catalog() -> Vec<Product> {
    vec![panjabi(), saree()]
}

pub fn config() -> StorefrontConfig {
    StorefrontConfig::default()
}

pub fn accepted() -> Value {
    serde_json::json!({ "status": true, "message": "OK" })
}
