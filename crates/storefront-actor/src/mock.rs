//! # Mock Framework & Testing Guide
//!
//! `MockClient<S>` hands out a real [`StateClient<S>`] whose requests are answered from a
//! queue of expectations instead of a running state. It lets you test the logic *around*
//! a client (reply unwrapping, error mapping) without spawning the actor.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing client wrappers | Testing the state machine or full system |
//! | **Error Injection** | Easy (`return_err`) | Requires a specific state |
//!
//! ## Fluent expectations
//!
//! ```rust,ignore
//! let mut mock = MockClient::<CatalogState>::new();
//! mock.expect_request()
//!     .matching(|request| matches!(request, CatalogRequest::Status))
//!     .return_ok(CatalogReply::Status(CatalogStatus::Loading));
//!
//! let client = CatalogClient::new(mock.client());
//! assert_eq!(client.status().await?, CatalogStatus::Loading);
//! mock.verify();
//! ```
//!
//! ## Manual inspection
//!
//! Use [`create_mock_client`] to get a client and the raw receiver, then pull messages off
//! with [`expect_request`] / [`expect_event`] and answer them yourself. This is the way to
//! simulate slow or out-of-order replies.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::{ActorMessage, Response};
use crate::state::ActorState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

type Matcher<S> = Box<dyn Fn(&<S as ActorState>::Request) -> bool + Send>;

struct Expectation<S: ActorState> {
    matcher: Option<Matcher<S>>,
    response: Result<S::Reply, FrameworkError>,
}

struct Ledger<S: ActorState> {
    expectations: VecDeque<Expectation<S>>,
    failures: Vec<String>,
    events: usize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<S: ActorState> {
    client: StateClient<S>,
    ledger: Arc<Mutex<Ledger<S>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> MockClient<S> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ActorMessage<S>>(100);
        let ledger = Arc::new(Mutex::new(Ledger {
            expectations: VecDeque::new(),
            failures: Vec::new(),
            events: 0,
        }));
        let task_ledger = ledger.clone();

        let handle = tokio::spawn(async move {
            while let Some(message) = receiver.recv().await {
                match message {
                    ActorMessage::Request {
                        request,
                        respond_to,
                    } => {
                        let mut ledger = lock(&task_ledger);
                        match ledger.expectations.pop_front() {
                            Some(expectation) => {
                                let matched = expectation
                                    .matcher
                                    .as_ref()
                                    .map_or(true, |matcher| matcher(&request));
                                if !matched {
                                    ledger
                                        .failures
                                        .push(format!("request did not match: {request:?}"));
                                }
                                drop(ledger);
                                let _ = respond_to.send(expectation.response);
                            }
                            None => {
                                ledger.failures.push(format!("unexpected request: {request:?}"));
                                drop(ledger);
                                let _ = respond_to.send(Err(FrameworkError::ActorDropped));
                            }
                        }
                    }
                    ActorMessage::Event(_) => lock(&task_ledger).events += 1,
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            ledger,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Queues the answer for the next request.
    pub fn expect_request(&mut self) -> RequestExpectationBuilder<S> {
        RequestExpectationBuilder {
            matcher: None,
            ledger: self.ledger.clone(),
        }
    }

    /// Number of events delivered to the mock so far.
    pub fn events_received(&self) -> usize {
        lock(&self.ledger).events
    }

    /// Verifies that all expectations were met and every request matched.
    ///
    /// # Panics
    /// Panics with the list of problems when verification fails.
    pub fn verify(&self) {
        let ledger = lock(&self.ledger);
        if !ledger.failures.is_empty() {
            panic!("Mock expectations violated: {:?}", ledger.failures);
        }
        if !ledger.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                ledger.expectations.len()
            );
        }
    }
}

/// Builder for request expectations.
pub struct RequestExpectationBuilder<S: ActorState> {
    matcher: Option<Matcher<S>>,
    ledger: Arc<Mutex<Ledger<S>>>,
}

impl<S: ActorState> RequestExpectationBuilder<S> {
    /// Only accept requests for which `matcher` returns true.
    pub fn matching(mut self, matcher: impl Fn(&S::Request) -> bool + Send + 'static) -> Self {
        self.matcher = Some(Box::new(matcher));
        self
    }

    /// Sets the expectation to return a successful reply.
    pub fn return_ok(self, reply: S::Reply) {
        self.push(Ok(reply));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::Reply, FrameworkError>) {
        lock(&self.ledger).expectations.push_back(Expectation {
            matcher: self.matcher,
            response,
        });
    }
}

/// Creates a client and the receiver for its messages.
///
/// # Testing Strategy
/// Instead of spawning a `StateActor`, the test owns the receiving end and plays the actor:
/// it inspects each message and answers (or delays, or drops) it deterministically.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
) -> (StateClient<S>, mpsc::Receiver<ActorMessage<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a request.
pub async fn expect_request<S: ActorState>(
    receiver: &mut mpsc::Receiver<ActorMessage<S>>,
) -> Option<(S::Request, Response<S::Reply>)> {
    match receiver.recv().await {
        Some(ActorMessage::Request {
            request,
            respond_to,
        }) => Some((request, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an event.
pub async fn expect_event<S: ActorState>(
    receiver: &mut mpsc::Receiver<ActorMessage<S>>,
) -> Option<S::Event> {
    match receiver.recv().await {
        Some(ActorMessage::Event(event)) => Some(event),
        _ => None,
    }
}
