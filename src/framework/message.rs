//! # Generic Messages
//!
//! Message types sent from a [`ResourceClient`](crate::framework::ResourceClient) to its
//! [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot reply channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request envelope processed by the actor loop.
///
/// - **Action**: runs [`ActorEntity::handle_action`] against the owned state.
/// - **Snapshot**: returns a clone of the whole state, for inspection.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Snapshot {
        respond_to: Response<T>,
    },
}
