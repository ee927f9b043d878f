//! Typed clients for the storefront actors.

pub mod catalog_client;
pub mod order_client;

pub use catalog_client::CatalogClient;
pub use order_client::OrderClient;
