//! Broadcast event bus.

use tokio::sync::broadcast;

use super::GameEvent;

/// Fan-out channel for [`GameEvent`]s.
///
/// Publishing never blocks or fails; with no subscribers the event is
/// dropped, and slow subscribers observe `RecvError::Lagged`.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<GameEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, event: GameEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("No subscribers for event");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
