//! # Generic Actor Server
//!
//! `ResourceActor` owns one [`ActorEntity`] value and the receiving end of its channel.
//! Requests are processed one at a time, so every action observes and leaves behind a
//! consistent state without any `Mutex` around the entity.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The server half of an actor.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new(state, buffer)` returns the actor and its client.
/// 2. **Wire & Run**: spawn `actor.run(context)` on the Tokio runtime.
/// 3. **Use**: clone the client wherever requests are issued.
///
/// ```ignore
/// let (actor, client) = ResourceActor::new(ActivityRegistry::default(), 32);
/// let handle = tokio::spawn(actor.run(()));
/// let reply = client.perform_action(action).await?;
/// ```
///
/// The loop exits when every client has been dropped.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    state: T,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor around `state` and returns it with a connected client.
    ///
    /// `buffer_size` is the channel capacity; senders wait when it is full.
    pub fn new(state: T, buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, state };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the event loop until the channel closes.
    pub async fn run(mut self, context: T::Context) {
        // Short type name, e.g. "ActivityRegistry"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        if let Err(e) = self.state.on_start(&context).await {
            warn!(entity_type, error = %e, "on_start failed");
            return;
        }
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => debug!(entity_type, size = self.state.size(), "Action ok"),
                        Err(e) => warn!(entity_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Snapshot { respond_to } => {
                    debug!(entity_type, size = self.state.size(), "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(entity_type, size = self.state.size(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, Default)]
    struct Counter {
        value: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Add(u32),
        Fail,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter refused")]
    struct CounterError;

    #[async_trait]
    impl ActorEntity for Counter {
        type Action = CounterAction;
        type ActionResult = u32;
        type Context = ();
        type Error = CounterError;

        async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<u32, CounterError> {
            match action {
                CounterAction::Add(n) => {
                    self.value += n;
                    Ok(self.value)
                }
                CounterAction::Fail => Err(CounterError),
            }
        }

        fn size(&self) -> usize {
            self.value as usize
        }
    }

    #[tokio::test]
    async fn actions_are_applied_in_order() {
        let (actor, client) = ResourceActor::new(Counter::default(), 4);
        let handle = tokio::spawn(actor.run(()));

        assert_eq!(client.perform_action(CounterAction::Add(2)).await.unwrap(), 2);
        assert_eq!(client.perform_action(CounterAction::Add(3)).await.unwrap(), 5);
        assert_eq!(client.snapshot().await.unwrap().value, 5);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn entity_errors_are_wrapped() {
        let (actor, client) = ResourceActor::new(Counter::default(), 4);
        tokio::spawn(actor.run(()));

        let err = client.perform_action(CounterAction::Fail).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        assert_eq!(err.to_string(), "Entity error: counter refused");

        // State survives a failed action
        assert_eq!(client.perform_action(CounterAction::Add(1)).await.unwrap(), 1);
    }

    /// Refuses to start unless the context allows it.
    #[derive(Clone, Debug, Default)]
    struct Gated;

    #[async_trait]
    impl ActorEntity for Gated {
        type Action = ();
        type ActionResult = ();
        type Context = bool;
        type Error = CounterError;

        async fn on_start(&mut self, open: &bool) -> Result<(), CounterError> {
            if *open {
                Ok(())
            } else {
                Err(CounterError)
            }
        }

        async fn handle_action(&mut self, _: (), _: &bool) -> Result<(), CounterError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn failed_start_stops_the_actor() {
        let (actor, client) = ResourceActor::new(Gated, 4);
        tokio::spawn(actor.run(false)).await.unwrap();

        let err = client.perform_action(()).await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }

    #[tokio::test]
    async fn successful_start_serves_requests() {
        let (actor, client) = ResourceActor::new(Gated, 4);
        tokio::spawn(actor.run(true));

        client.perform_action(()).await.unwrap();
    }

    #[tokio::test]
    async fn closed_actor_reports_actor_closed() {
        let (actor, client) = ResourceActor::new(Counter::default(), 4);
        drop(actor);

        let err = client.perform_action(CounterAction::Add(1)).await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }
}
