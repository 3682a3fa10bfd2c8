use super::actor::{CalendarActor, CalendarActorHandle};
use super::models::{CalendarEvent, EventId, EventPatch, NewEventInput};
use super::store::EventStore;
use crate::error::CalendarResult;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the calendar actor.
///
/// Clones share one actor, so every write goes through a single owner while
/// readers work on snapshots.
#[derive(Clone)]
pub struct CalendarHandle {
    actor_handle: CalendarActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl CalendarHandle {
    /// Create a new CalendarHandle and spawn the actor
    pub fn new(store: EventStore) -> Self {
        let (mut actor, handle) = CalendarActor::new(store);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    pub async fn add(&self, input: NewEventInput) -> CalendarResult<CalendarEvent> {
        self.actor_handle.add(input).await
    }

    pub async fn update(&self, id: EventId, patch: EventPatch) -> CalendarResult<CalendarEvent> {
        self.actor_handle.update(id, patch).await
    }

    pub async fn remove(&self, id: EventId) -> CalendarResult<Option<CalendarEvent>> {
        self.actor_handle.remove(id).await
    }

    /// Events in store order, copied out of the actor
    pub async fn snapshot(&self) -> CalendarResult<Vec<CalendarEvent>> {
        self.actor_handle.snapshot().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> CalendarResult<()> {
        self.actor_handle.shutdown().await
    }
}
