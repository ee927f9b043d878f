//! # ActorClient Trait
//!
//! Common interface for state-specific clients: a default `call` method built on top of
//! the generic [`StateClient`], with errors mapped into the client's own error type.
use crate::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for domain clients that wrap a [`StateClient`].
///
/// Implementors provide access to the inner client and an error mapping; `call` then
/// sends a request and translates any [`FrameworkError`] into `Self::Error`.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<CatalogState> for CatalogClient {
///     type Error = CatalogError;
///
///     fn inner(&self) -> &StateClient<CatalogState> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         e.downcast_state::<CatalogError>()
///             .unwrap_or_else(|e| CatalogError::ActorCommunicationError(e.to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The state-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send a request and wait for the reply.
    #[tracing::instrument(skip(self))]
    async fn call(&self, request: S::Request) -> Result<S::Reply, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().request(request).await.map_err(Self::map_error)
    }
}
