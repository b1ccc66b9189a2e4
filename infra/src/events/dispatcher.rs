//! Channel-backed `EventDispatcher`

use async_trait::async_trait;
use tokio::sync::mpsc::{self, error::TrySendError};

use expense_core::{DomainEvent, EventDispatcher};

/// Events buffered before `dispatch` starts dropping them
pub const EVENT_QUEUE_CAPACITY: usize = 1024;

pub struct ChannelEventDispatcher {
    sender: mpsc::Sender<DomainEvent>,
}

impl ChannelEventDispatcher {
    /// Dispatcher plus the receiving end for [`super::spawn_event_worker`]
    pub fn new() -> (Self, mpsc::Receiver<DomainEvent>) {
        Self::with_capacity(EVENT_QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> (Self, mpsc::Receiver<DomainEvent>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl EventDispatcher for ChannelEventDispatcher {
    async fn dispatch(&self, event: DomainEvent) {
        let name = event.name();

        // Never waits: dispatch runs inside the caller's transaction
        match self.sender.try_send(event) {
            Ok(()) => tracing::debug!(event_name = name, "Event queued"),
            Err(TrySendError::Full(_)) => tracing::warn!(
                event_name = name,
                event = "event_dropped",
                "Event queue is full, event dropped"
            ),
            Err(TrySendError::Closed(_)) => tracing::warn!(
                event_name = name,
                event = "event_dropped",
                "Event worker is gone, event dropped"
            ),
        }
    }
}
