use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients built on a generic [`ResourceClient`].
///
/// Provides `perform` and `snapshot` with errors already mapped into the
/// resource's own error type.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send one action and wait for its result.
    #[tracing::instrument(skip(self))]
    async fn perform(&self, action: T::Action) -> Result<T::ActionResult, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().perform_action(action).await.map_err(Self::map_error)
    }

    /// Clone of the full actor state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
