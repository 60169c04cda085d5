//! Error types for the registry actor.

use thiserror::Error;

/// Errors that can occur while talking to the registry.
///
/// Registry operations themselves are total; failures only come from the actor plumbing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// The actor replied with a result that does not match the request.
    #[error("Unexpected registry reply: {0}")]
    UnexpectedReply(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RegistryError {
    fn from(msg: String) -> Self {
        RegistryError::ActorCommunicationError(msg)
    }
}
