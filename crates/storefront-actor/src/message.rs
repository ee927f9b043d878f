//! # Generic Messages
//!
//! This module defines the message types that travel between a [`StateClient`](crate::StateClient)
//! and its [`StateActor`](crate::StateActor).

use crate::error::FrameworkError;
use crate::state::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message delivered to a state actor's mailbox.
///
/// - **Request**: sent by a client, answered through `respond_to`.
/// - **Event**: posted by the actor's own spawned work (or by a client that does not
///   need an answer).
pub enum ActorMessage<S: ActorState> {
    Request {
        request: S::Request,
        respond_to: Response<S::Reply>,
    },
    Event(S::Event),
}

/// The answering half of a request.
///
/// A state either answers immediately or keeps the `Responder` until the work it
/// started has finished. Dropping it unanswered makes the caller see
/// [`FrameworkError::ActorDropped`].
#[derive(Debug)]
pub struct Responder<T> {
    sender: Response<T>,
}

impl<T> Responder<T> {
    pub fn new(sender: Response<T>) -> Self {
        Self { sender }
    }

    /// Sends a successful reply. Returns `false` if the caller has gone away.
    pub fn ok(self, value: T) -> bool {
        self.sender.send(Ok(value)).is_ok()
    }

    /// Sends a state-level error; clients can recover it with
    /// [`FrameworkError::downcast_state`].
    pub fn err<E>(self, error: E) -> bool
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.sender
            .send(Err(FrameworkError::StateError(Box::new(error))))
            .is_ok()
    }

    /// True once the caller has stopped waiting for the answer.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
