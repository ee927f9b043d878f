//! Error types for the Catalog actor.

use thiserror::Error;

/// Errors that can occur when reading the catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The catalog is still being fetched.
    #[error("Catalog is still loading")]
    Loading,

    /// The catalog fetch failed; carries the human-readable reason.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// No product with this id is in the catalog.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
