//! Deployment use case: activity identifier in, runtime locator out.

use crate::clients::RegistryClient;
use crate::error::ProviderError;
use crate::mission::{ClassificationMission, Mission, MissionFactory};
use crate::model::ActivityConfig;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

/// Coordinates the factory, the mission and the registry for one deployment.
#[derive(Clone)]
pub struct Deployer {
    factory: MissionFactory,
    registry: RegistryClient,
}

impl Deployer {
    pub fn new(registry: RegistryClient) -> Self {
        Self {
            factory: MissionFactory::new(),
            registry,
        }
    }

    /// Deploy `activity_id` and return `base_url/runtime/<activity_id>`.
    ///
    /// An identifier the factory cannot resolve is deployed as a default
    /// [`ClassificationMission`] rather than rejected. Parameters are always loaded
    /// from an empty configuration, so every attribute takes its default.
    ///
    /// The returned locator is not backed by a runtime resource yet.
    ///
    /// # Errors
    /// - [`ProviderError::MissingActivityId`] for an absent or empty identifier
    /// - [`ProviderError::Registry`] when the registry actor is gone
    #[instrument(skip(self))]
    pub async fn deploy(&self, activity_id: Option<&str>, base_url: &str) -> Result<String, ProviderError> {
        let activity_id = match activity_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(ProviderError::MissingActivityId),
        };

        let mut mission: Box<dyn Mission> = match self.factory.create_mission(activity_id) {
            Ok(mission) => mission,
            Err(e) => {
                warn!(error = %e, "Falling back to default classification mission");
                Box::new(ClassificationMission::default())
            }
        };

        let empty_config: Value = json!({});
        mission.load_parameters(&empty_config);
        let initial_state = mission.start_simulation();
        let config = ActivityConfig::new(mission.kind().as_str(), initial_state);

        self.registry.register(activity_id, config, base_url).await?;

        let runtime_url = format!("{}/runtime/{}", base_url.trim_end_matches('/'), activity_id);
        info!(kind = %mission.kind(), %runtime_url, "Activity deployed");
        Ok(runtime_url)
    }

    /// Registry handle used by this deployer.
    pub fn registry(&self) -> &RegistryClient {
        &self.registry
    }
}
