//! # Catalog Actor
//!
//! Loads the product list once and serves it for the rest of the session.
//!
//! ## Overview
//!
//! On start the actor spawns a single fetch through the injected
//! [`StorefrontApi`](crate::api::StorefrontApi) and stays `Loading` until the result is
//! posted back to its own mailbox. It then moves to `Ready(products)` or
//! `Failed(message)` and never changes again; there is no retry.
//!
//! ## Structure
//!
//! - [`actions`] - [`CatalogRequest`], [`CatalogReply`], [`CatalogEvent`] and [`CatalogStatus`]
//! - [`state`] - [`CatalogState`], the [`ActorState`](storefront_actor::ActorState) implementation
//! - [`error`] - [`CatalogError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, inner) = catalog_actor::new();
//! let catalog = CatalogClient::new(inner);
//! tokio::spawn(actor.run(api.clone()));
//!
//! match catalog.settled().await? {
//!     CatalogStatus::Ready(products) => println!("{} products", products.len()),
//!     CatalogStatus::Failed(reason) => eprintln!("{reason}"),
//!     CatalogStatus::Loading => unreachable!(),
//! }
//! ```

pub mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::CatalogState;

use storefront_actor::{StateActor, StateClient};

/// Creates a new Catalog actor and its client.
pub fn new() -> (StateActor<CatalogState>, StateClient<CatalogState>) {
    StateActor::new(CatalogState::new(), 32)
}
