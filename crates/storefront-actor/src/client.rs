//! # Generic Client
//!
//! This module defines the handles used to talk to a [`StateActor`](crate::StateActor):
//!
//! - [`StateClient`]: the strong, cloneable handle given to callers. The actor keeps running
//!   as long as at least one `StateClient` exists.
//! - [`Mailbox`]: a weak handle the state uses to post events back to itself from spawned
//!   work. It never keeps the actor alive on its own.

use crate::error::FrameworkError;
use crate::message::ActorMessage;
use crate::state::ActorState;
use tokio::sync::{mpsc, oneshot};

/// ## StateClient
///
/// A type-safe, async handle to a `StateActor<S>`. It forwards requests over a Tokio mpsc
/// channel and waits for the answer on a oneshot channel.
///
/// * **Cloneable**: holds only a sender, so cloning is inexpensive.
/// * **Async API**: every call resolves to `Result<…, FrameworkError>`.
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<ActorMessage<S>>,
}

impl<S: ActorState> Clone for StateClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<ActorMessage<S>>) -> Self {
        Self { sender }
    }

    /// Sends a request and waits for the state's reply.
    pub async fn request(&self, request: S::Request) -> Result<S::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ActorMessage::Request {
                request,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Delivers an event without waiting for it to be handled.
    pub async fn notify(&self, event: S::Event) -> Result<(), FrameworkError> {
        self.sender
            .send(ActorMessage::Event(event))
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }

    /// A weak mailbox for the same actor.
    pub fn mailbox(&self) -> Mailbox<S> {
        Mailbox::new(self.sender.downgrade())
    }
}

/// Weak handle an actor hands to its own spawned work.
///
/// Posting succeeds only while some [`StateClient`] is still alive; once every client is
/// dropped the actor shuts down and late events are discarded.
pub struct Mailbox<S: ActorState> {
    sender: mpsc::WeakSender<ActorMessage<S>>,
}

impl<S: ActorState> Clone for Mailbox<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorState> Mailbox<S> {
    pub fn new(sender: mpsc::WeakSender<ActorMessage<S>>) -> Self {
        Self { sender }
    }

    /// Posts an event to the actor.
    ///
    /// Returns [`FrameworkError::ActorClosed`] when the actor is gone.
    pub async fn post(&self, event: S::Event) -> Result<(), FrameworkError> {
        let sender = self.sender.upgrade().ok_or(FrameworkError::ActorClosed)?;
        sender
            .send(ActorMessage::Event(event))
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}
