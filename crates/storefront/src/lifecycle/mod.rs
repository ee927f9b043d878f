//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the storefront actors.
//!
//! ## The Storefront Pattern
//!
//! [`Storefront`] is the conductor of the system:
//!
//! ```rust,ignore
//! let storefront = Storefront::from_config(config)?;
//!
//! let draft = storefront.select_product_by_id("17".into()).await?;
//! storefront.order_client.open_order_form().await?;
//! // ... fill in and submit through `storefront.order_client` ...
//!
//! storefront.shutdown().await?;
//! ```
//!
//! ## Dependency Injection via Context
//!
//! Both actors are created without dependencies and receive the shared
//! [`StorefrontApi`](crate::api::StorefrontApi) through `run(context)`:
//!
//! ```rust,ignore
//! impl ActorState for CatalogState {
//!     type Context = SharedApi;
//! }
//!
//! impl ActorState for OrderState {
//!     type Context = SharedApi;
//! }
//! ```
//!
//! Tests pass a scripted API instead of [`HttpStorefrontApi`](crate::api::HttpStorefrontApi)
//! through [`Storefront::start`].
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - `on_stop` cancels the notice timer
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! Spawned work (the catalog fetch, an order request) only holds a weak mailbox, so it
//! never keeps an actor alive past its last client.
//!
//! ## Observability & Tracing
//!
//! Call [`setup_tracing`](storefront_actor::telemetry::setup_tracing) once at startup:
//!
//! ```bash
//! RUST_LOG=info storefront products    # Compact logs
//! RUST_LOG=debug storefront products   # Full payloads
//! ```

pub mod storefront;

pub use self::storefront::*;
