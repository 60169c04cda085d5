//! Generic actor plumbing for owning mutable state behind a channel.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait implemented by state owned by an actor
//! - [`ResourceActor`] - Runs the sequential message loop over that state
//! - [`ResourceClient`] - Cloneable sender used by callers
//! - [`FrameworkError`] - Plumbing errors (closed actor, dropped reply)

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
