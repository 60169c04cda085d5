//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a piece of state must satisfy to be owned by a
//! [`ResourceActor`](crate::framework::ResourceActor). The actor holds exactly one value of the
//! entity and feeds it every request in arrival order, so the entity itself never needs a lock.
//!
//! # Associated Types
//! - `Action` / `ActionResult`: the request enum and its 1:1 reply enum.
//! - `Context`: dependencies injected at `run()` time ("late binding"). Use `()` if none.
//! - `Error`: the per-actor error type returned from hooks.

use async_trait::async_trait;
use std::fmt::Debug;

/// State that can be owned and driven by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so an entity may await other actors while handling a
/// request. The `Context` is passed to every hook, which lets callers wire clients into
/// `run()` after all actors have been constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Enum of operations the entity understands.
    type Action: Send + Sync + Debug;

    /// Result type of `handle_action`. Variants should match `Action` 1:1.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor.
    type Context: Send + Sync;

    /// Per-actor error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once when the actor loop starts, before any request is handled.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle one request. The actor guarantees no other request runs concurrently.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Number of items held, reported in lifecycle logs.
    fn size(&self) -> usize {
        0
    }
}
