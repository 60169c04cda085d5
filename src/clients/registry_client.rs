use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{ActivityConfig, AnalyticsRecord};
use crate::registry_actor::{ActivityRegistry, RegistryAction, RegistryActionResult, RegistryError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the registry actor.
#[derive(Clone)]
pub struct RegistryClient {
    inner: ResourceClient<ActivityRegistry>,
}

impl RegistryClient {
    pub fn new(inner: ResourceClient<ActivityRegistry>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<ActivityRegistry> for RegistryClient {
    type Error = RegistryError;

    fn inner(&self) -> &ResourceClient<ActivityRegistry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RegistryError::ActorCommunicationError(e.to_string())
    }
}

impl RegistryClient {
    /// Store `config` and seed analytics for `activity_id` atomically.
    #[instrument(skip(self, config))]
    pub async fn register(
        &self,
        activity_id: &str,
        config: ActivityConfig,
        base_url: &str,
    ) -> Result<(), RegistryError> {
        debug!(?config, "Sending request");
        let action = RegistryAction::Register {
            activity_id: activity_id.to_string(),
            config,
            base_url: base_url.to_string(),
        };
        match self.perform(action).await? {
            RegistryActionResult::Register => Ok(()),
            other => Err(RegistryError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_config(&self, activity_id: &str) -> Result<Option<ActivityConfig>, RegistryError> {
        match self.perform(RegistryAction::GetConfig(activity_id.to_string())).await? {
            RegistryActionResult::GetConfig(config) => Ok(config),
            other => Err(RegistryError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Analytics for `activity_id`; an unknown activity yields one default record.
    #[instrument(skip(self))]
    pub async fn get_analytics(&self, activity_id: &str) -> Result<Vec<AnalyticsRecord>, RegistryError> {
        match self.perform(RegistryAction::GetAnalytics(activity_id.to_string())).await? {
            RegistryActionResult::GetAnalytics(records) => Ok(records),
            other => Err(RegistryError::UnexpectedReply(format!("{other:?}"))),
        }
    }
}
