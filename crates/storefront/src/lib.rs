//! # Storefront Library
//!
//! Catalog loading and the cash-on-delivery order workflow, built on the
//! `storefront-actor` runtime. The `storefront` binary and the integration tests use
//! these modules directly.
//!
//! - [`catalog_actor`] - fetches the product list once and serves it
//! - [`order_actor`] - draft, validation, price computation and submission
//! - [`clients`] - typed wrappers over the actor clients
//! - [`lifecycle`] - starts and stops both actors as one [`Storefront`](lifecycle::Storefront)
//! - [`api`] - the remote catalog and order endpoints
//! - [`model`], [`pricing`], [`config`] - plain data and arithmetic

pub mod api;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
