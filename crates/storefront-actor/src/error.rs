//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor runtime.
//! State-specific errors travel inside [`FrameworkError::StateError`] and can be
//! recovered by the typed client with [`FrameworkError::downcast_state`].

/// Errors that can occur within the actor runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the concrete state error `E`, or gives `self` back unchanged.
    pub fn downcast_state<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            Self::StateError(inner) => inner
                .downcast::<E>()
                .map(|error| *error)
                .map_err(Self::StateError),
            other => Err(other),
        }
    }
}
