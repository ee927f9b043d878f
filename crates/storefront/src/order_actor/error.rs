//! Error types for the Order actor.
//!
//! A rejected or failed order is not an error: it is an
//! [`OrderResult::Failure`](crate::model::OrderResult). These variants cover calls the
//! workflow cannot act on at all.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The operation needs a selected product.
    #[error("No product selected")]
    NoProductSelected,

    /// A submission is already outstanding; no second request was sent.
    #[error("An order is already being submitted")]
    SubmissionInFlight,

    /// The draft was replaced or closed before the order response arrived.
    #[error("Order superseded before the response arrived")]
    Superseded,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
