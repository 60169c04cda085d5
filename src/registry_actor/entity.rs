//! [`ActorEntity`] implementation that lets a `ResourceActor` own the [`ActivityRegistry`].

use super::actions::{RegistryAction, RegistryActionResult};
use super::error::RegistryError;
use super::registry::ActivityRegistry;
use crate::framework::ActorEntity;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for ActivityRegistry {
    type Action = RegistryAction;
    type ActionResult = RegistryActionResult;
    type Context = ();
    type Error = RegistryError;

    /// # Actions
    /// - `Register`: upserts config and analytics together
    /// - `GetConfig`: clone of the stored config, if any
    /// - `GetAnalytics`: stored records or the default record
    async fn handle_action(
        &mut self,
        action: RegistryAction,
        _ctx: &Self::Context,
    ) -> Result<RegistryActionResult, RegistryError> {
        match action {
            RegistryAction::Register {
                activity_id,
                config,
                base_url,
            } => {
                let mission_type = config.mission_type.clone();
                self.register(&activity_id, config, &base_url);
                info!(%activity_id, %mission_type, size = self.config_count(), "Registered");
                Ok(RegistryActionResult::Register)
            }
            RegistryAction::GetConfig(activity_id) => Ok(RegistryActionResult::GetConfig(
                self.get_config(&activity_id).cloned(),
            )),
            RegistryAction::GetAnalytics(activity_id) => Ok(RegistryActionResult::GetAnalytics(
                self.get_analytics(&activity_id),
            )),
        }
    }

    fn size(&self) -> usize {
        self.config_count()
    }
}
