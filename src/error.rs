//! Errors surfaced at the provider boundary.

use crate::registry_actor::RegistryError;
use thiserror::Error;

/// Errors returned by provider use cases.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    /// The caller did not supply an activity identifier, or supplied an empty one.
    #[error("Missing activityID")]
    MissingActivityId,

    /// The request body could not be understood.
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// The registry could not be reached.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ProviderError {
    /// Whether the caller is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ProviderError::MissingActivityId | ProviderError::InvalidRequestBody(_)
        )
    }
}
