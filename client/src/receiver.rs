use tokio::sync::mpsc;

use crate::handler::ArenaHandler;
use arena_battle::ArenaEvent;

/// Receives arena events and dispatches them to a handler.
pub struct EventReceiver {
    incoming: mpsc::UnboundedReceiver<ArenaEvent>,
}

impl EventReceiver {
    pub(crate) fn new(incoming: mpsc::UnboundedReceiver<ArenaEvent>) -> Self {
        Self { incoming }
    }

    /// Wait for the next event
    ///
    /// Returns `None` once every session handle has been dropped.
    pub async fn recv(&mut self) -> Option<ArenaEvent> {
        self.incoming.recv().await
    }

    /// Take an event that is already queued, without waiting
    pub fn try_recv(&mut self) -> Option<ArenaEvent> {
        self.incoming.try_recv().ok()
    }

    /// Drain everything queued so far
    pub fn drain(&mut self) -> Vec<ArenaEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }

    /// Run the event loop, dispatching events to the handler.
    ///
    /// This will run until every session handle has been dropped.
    pub async fn run<H: ArenaHandler>(&mut self, handler: &mut H) {
        while let Some(event) = self.incoming.recv().await {
            dispatch_event(handler, event).await;
        }
    }
}

/// Dispatch a single event to the appropriate handler method
pub async fn dispatch_event<H: ArenaHandler>(handler: &mut H, event: ArenaEvent) {
    match event {
        ArenaEvent::SlotChanged { slot, creature } => {
            handler.on_slot_changed(slot, creature.as_ref()).await;
        }
        ArenaEvent::ResolutionStarted => {
            handler.on_resolution_started().await;
        }
        ArenaEvent::VerdictPublished(verdict) => {
            handler.on_verdict(verdict).await;
        }
        ArenaEvent::Cleared => {
            handler.on_cleared().await;
        }
    }
}
