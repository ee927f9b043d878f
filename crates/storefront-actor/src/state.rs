//! # ActorState Trait
//!
//! The `ActorState` trait is the contract for anything that wants to live inside a
//! [`StateActor`](crate::StateActor). One value of the implementing type is owned by the
//! actor task for its entire life, and every request or event is applied to it in turn.
//!
//! # Requests and Events
//!
//! Two kinds of messages reach the state:
//!
//! - **Requests** come from clients and carry a [`Responder`]. The state may answer at
//!   once or keep the responder and answer later (for example once a network call it
//!   spawned has finished).
//! - **Events** are fire-and-forget notifications. They are usually posted by work the
//!   state spawned itself through its [`Mailbox`], such as an HTTP response or an
//!   expired timer.
//!
//! Because both arrive through the same channel, the state never needs a lock: a slow
//! operation is spawned off the actor and its completion is just another message.

use crate::client::Mailbox;
use crate::message::Responder;
use async_trait::async_trait;
use std::fmt::Debug;

/// State owned and driven by a [`StateActor`](crate::StateActor).
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await, but they should not block on
/// long-running I/O: spawn it and post the result back as an [`ActorState::Event`].
/// The `Context` type carries dependencies that are injected when the actor is run
/// rather than when it is built ("late binding").
#[async_trait]
pub trait ActorState: Send + Sized + 'static {
    /// Requests sent by clients.
    type Request: Send + Debug;

    /// Reply delivered to the client that sent a request.
    type Reply: Send + Debug;

    /// Internal notifications, typically posted by spawned work.
    type Event: Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type reported to clients through [`Responder::err`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once before the first message is processed.
    async fn on_start(
        &mut self,
        _ctx: &Self::Context,
        _mailbox: &Mailbox<Self>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a client request. The responder may be answered now or stored.
    async fn handle_request(
        &mut self,
        request: Self::Request,
        responder: Responder<Self::Reply>,
        ctx: &Self::Context,
        mailbox: &Mailbox<Self>,
    );

    /// Handle an internal event.
    async fn handle_event(
        &mut self,
        event: Self::Event,
        ctx: &Self::Context,
        mailbox: &Mailbox<Self>,
    );

    /// Called after the mailbox closes, before the actor task returns.
    fn on_stop(&mut self) {}
}
