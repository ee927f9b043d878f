//! # Storefront Actor Runtime
//!
//! The foundational building blocks for the storefront's state actors: a single piece of
//! state owned by one Tokio task, driven by messages from typed clients.
//!
//! ## Why a State Actor?
//!
//! The storefront's workflows are event driven. A visitor action or the completion of a
//! network call changes state, and nothing else does. Modelling each workflow as an actor
//! gives:
//!
//! - **Isolated state**: one task owns it, so there are no locks
//! - **Sequential transitions**: messages are applied one at a time, in arrival order
//! - **Non-blocking I/O**: slow work is spawned and reports back through the actor's own
//!   [`Mailbox`] as an event, so the actor keeps answering while a request is in flight
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`ActorState`]): your workflow and its transitions
//! 2. **Runtime Layer** ([`StateActor`]): message loop and lifecycle hooks
//! 3. **Interface Layer** ([`StateClient`], [`ActorClient`]): type-safe communication
//!
//! ## Deferred Replies
//!
//! A request arrives together with a [`Responder`]. The state can answer right away, or
//! keep the responder until a spawned operation posts its result back:
//!
//! ```rust,ignore
//! async fn handle_request(&mut self, request: Request, responder: Responder<Reply>, ctx: &Api, mailbox: &Mailbox<Self>) {
//!     let mailbox = mailbox.clone();
//!     let api = ctx.clone();
//!     tokio::spawn(async move {
//!         let result = api.call().await;
//!         let _ = mailbox.post(Event::Finished(result)).await;
//!     });
//!     self.waiting = Some(responder);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - The actor stops when the last [`StateClient`] is dropped; weak [`Mailbox`] handles
//!   held by spawned work do not keep it alive
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) with fluent expectations
//! and raw-receiver helpers for testing client wrappers without spawning any actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod telemetry;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::{Mailbox, StateClient};
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{ActorMessage, Responder, Response};
pub use state::ActorState;
