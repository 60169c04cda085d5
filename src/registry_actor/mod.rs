//! # Registry Actor
//!
//! Owns the [`ActivityRegistry`] inside a [`ResourceActor`] so that all reads and writes
//! are serialized through one task.
//!
//! ## Structure
//!
//! - [`registry`] - the two mappings and their operations
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation
//! - [`actions`] - request/reply enums
//! - [`error`] - [`RegistryError`]
//! - [`new()`] - creates the actor and its [`RegistryClient`]
//!
//! ## Usage
//!
//! ```ignore
//! let (actor, client) = registry_actor::new(32);
//! tokio::spawn(actor.run(()));
//! let records = client.get_analytics("CLASS101").await?;
//! ```

mod actions;
pub mod entity;
pub mod error;
pub mod registry;

pub use actions::*;
pub use error::*;
pub use registry::ActivityRegistry;

use crate::clients::RegistryClient;
use crate::framework::ResourceActor;

/// Creates a new registry actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<ActivityRegistry>, RegistryClient) {
    let (actor, generic_client) = ResourceActor::new(ActivityRegistry::new(), buffer_size);
    let client = RegistryClient::new(generic_client);

    (actor, client)
}
