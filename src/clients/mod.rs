//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod registry_client;

pub use actor_client::ActorClient;
pub use registry_client::*;
