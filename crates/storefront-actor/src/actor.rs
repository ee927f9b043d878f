//! # Generic Actor Server
//!
//! This module defines the `StateActor`, the task that owns one [`ActorState`] value and
//! applies every incoming message to it sequentially.

use crate::client::{Mailbox, StateClient};
use crate::message::{ActorMessage, Responder};
use crate::state::ActorState;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// ## StateActor
///
/// The *server* half of the runtime. It owns the state and the receiving end of the
/// mailbox. Each actor runs in its own Tokio task, so the state is never shared and needs
/// no `Mutex`.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `StateActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = StateActor::new(CounterState::default(), 16);
/// let handle = tokio::spawn(actor.run(()));
///
/// let value = client.request(CounterRequest::Increment).await?;
///
/// drop(client);
/// handle.await?;
/// ```
///
/// # Message Handling
///
/// * **Request**: wrapped in a [`Responder`] and passed to [`ActorState::handle_request`].
/// * **Event**: passed to [`ActorState::handle_event`].
///
/// The loop ends when every [`StateClient`] has been dropped; the state's
/// [`ActorState::on_stop`] hook runs before the task returns.
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<ActorMessage<S>>,
    mailbox: Mailbox<S>,
    state: S,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around `state` and its associated `StateClient`.
    ///
    /// `buffer_size` is the capacity of the mailbox; senders wait when it is full.
    pub fn new(state: S, buffer_size: usize) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let client = StateClient::new(sender);
        let actor = Self {
            receiver,
            mailbox: client.mailbox(),
            state,
        };
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every hook. This lets the state reach
    /// dependencies (HTTP transport, other clients) that were created *after* the
    /// actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: S::Context) {
        // Just the type name, e.g. "CatalogState"
        let state_type = std::any::type_name::<S>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        if let Err(e) = self.state.on_start(&context, &self.mailbox).await {
            warn!(state_type, error = %e, "on_start failed");
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ActorMessage::Request {
                    request,
                    respond_to,
                } => {
                    debug!(state_type, ?request, "Request");
                    self.state
                        .handle_request(request, Responder::new(respond_to), &context, &self.mailbox)
                        .await;
                }
                ActorMessage::Event(event) => {
                    debug!(state_type, ?event, "Event");
                    self.state
                        .handle_event(event, &context, &self.mailbox)
                        .await;
                }
            }
        }

        self.state.on_stop();
        info!(state_type, "Shutdown");
    }
}
