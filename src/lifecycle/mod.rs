//! # System Lifecycle & Orchestration
//!
//! Starts the registry actor, wires the deployment use case to it, and shuts it down.
//!
//! - [`ProviderSystem`] - spawns actors and owns their task handles
//! - [`Deployer`] - the deployment use case (factory → mission → registry)
//! - [`setup_tracing`] - logging setup for the binary
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the registry channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the actor logs its final size and exits

pub mod deployment;
pub mod provider_system;
pub mod tracing;

pub use self::deployment::*;
pub use self::provider_system::*;
pub use self::tracing::setup_tracing;
