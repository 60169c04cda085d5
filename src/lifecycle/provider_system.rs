use crate::clients::RegistryClient;
use crate::lifecycle::Deployer;
use crate::registry_actor;
use tracing::{error, info};

/// Runtime owner of the activity provider.
///
/// `ProviderSystem` is responsible for:
/// - **Lifecycle Management**: starting the registry actor and stopping it on shutdown
/// - **Dependency Wiring**: handing the registry client to the [`Deployer`]
///
/// # Example
///
/// ```ignore
/// let system = ProviderSystem::new(32);
/// let url = system.deployer.deploy(Some("CLASS101"), "http://localhost:5000").await?;
/// system.shutdown().await?;
/// ```
pub struct ProviderSystem {
    /// Deployment use case, wired to the registry
    pub deployer: Deployer,

    /// Client for reading the registry
    pub registry_client: RegistryClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ProviderSystem {
    /// Spawns the registry actor with a channel of `buffer_size` and wires the deployer.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (registry_actor, registry_client) = registry_actor::new(buffer_size);
        let registry_handle = tokio::spawn(registry_actor.run(()));

        let deployer = Deployer::new(registry_client.clone());

        Self {
            deployer,
            registry_client,
            handles: vec![registry_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the clients held here and waits for the actor to drain. Clones handed out
    /// elsewhere (e.g. to the HTTP state) must be dropped first or this waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.deployer);
        drop(self.registry_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
