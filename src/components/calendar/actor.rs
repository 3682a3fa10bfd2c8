use super::models::{CalendarEvent, EventId, EventPatch, NewEventInput};
use super::store::EventStore;
use crate::error::{actor_error, CalendarResult};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// The calendar actor that owns the event store and applies every write
pub struct CalendarActor {
    store: EventStore,
    command_rx: mpsc::Receiver<CalendarCommand>,
}

/// Commands that can be sent to the calendar actor
pub enum CalendarCommand {
    Add(NewEventInput, oneshot::Sender<CalendarResult<CalendarEvent>>),
    Update(EventId, EventPatch, oneshot::Sender<CalendarResult<CalendarEvent>>),
    Remove(EventId, oneshot::Sender<Option<CalendarEvent>>),
    Snapshot(oneshot::Sender<Vec<CalendarEvent>>),
    Shutdown,
}

/// Handle for communicating with the calendar actor
#[derive(Clone)]
pub struct CalendarActorHandle {
    command_tx: mpsc::Sender<CalendarCommand>,
}

impl CalendarActorHandle {
    /// Add a new event
    pub async fn add(&self, input: NewEventInput) -> CalendarResult<CalendarEvent> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(CalendarCommand::Add(input, response_tx)).await?;
        Self::receive(response_rx).await?
    }

    /// Patch an existing event
    pub async fn update(&self, id: EventId, patch: EventPatch) -> CalendarResult<CalendarEvent> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(CalendarCommand::Update(id, patch, response_tx)).await?;
        Self::receive(response_rx).await?
    }

    /// Remove an event, returning it if it existed
    pub async fn remove(&self, id: EventId) -> CalendarResult<Option<CalendarEvent>> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(CalendarCommand::Remove(id, response_tx)).await?;
        Self::receive(response_rx).await
    }

    /// Copy of all events in store order
    pub async fn snapshot(&self) -> CalendarResult<Vec<CalendarEvent>> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(CalendarCommand::Snapshot(response_tx)).await?;
        Self::receive(response_rx).await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> CalendarResult<()> {
        let _ = self.command_tx.send(CalendarCommand::Shutdown).await;
        Ok(())
    }

    async fn send(&self, command: CalendarCommand) -> CalendarResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| actor_error(&format!("Actor mailbox error: {}", e)))
    }

    async fn receive<T>(response_rx: oneshot::Receiver<T>) -> CalendarResult<T> {
        response_rx
            .await
            .map_err(|_| actor_error("Response channel closed"))
    }
}

impl CalendarActor {
    /// Create a new actor around a store and return its handle
    pub fn new(store: EventStore) -> (Self, CalendarActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self { store, command_rx };
        let handle = CalendarActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Calendar actor started with {} events", self.store.len());

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                CalendarCommand::Add(input, response_tx) => {
                    let _ = response_tx.send(self.store.add(input));
                }
                CalendarCommand::Update(id, patch, response_tx) => {
                    let _ = response_tx.send(self.store.update(id, patch));
                }
                CalendarCommand::Remove(id, response_tx) => {
                    let _ = response_tx.send(self.store.remove(id));
                }
                CalendarCommand::Snapshot(response_tx) => {
                    debug!("Serving snapshot of {} events", self.store.len());
                    let _ = response_tx.send(self.store.list().to_vec());
                }
                CalendarCommand::Shutdown => {
                    info!("Calendar actor shutting down");
                    break;
                }
            }
        }

        info!("Calendar actor shut down");
    }
}
