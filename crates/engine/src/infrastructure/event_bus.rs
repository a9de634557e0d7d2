//! In-Process Event Bus - Broadcast fan-out of registry notifications
//!
//! Observers subscribe for a receiver and get every notification
//! published after that point, in publish order. Publishing is
//! fire-and-forget: with no live subscriber the notification is dropped,
//! and a subscriber that falls behind the channel capacity misses the
//! oldest entries (the `Lagged` error on its receiver tells it so).

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;

use cardfolio_domain::Notification;

use crate::application::ports::outbound::{EventBusError, EventBusPort};

/// Default capacity of the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process event bus backed by a tokio broadcast channel.
pub struct InProcessEventBus {
    sender: broadcast::Sender<Notification>,
}

impl InProcessEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to all notifications published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for InProcessEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl EventBusPort for InProcessEventBus {
    async fn publish(&self, notification: Notification) -> Result<(), EventBusError> {
        // A send error only means nobody is listening right now.
        if let Err(unobserved) = self.sender.send(notification) {
            debug!(
                event = unobserved.0.event.event_type(),
                "dropping notification with no subscribers"
            );
        }
        Ok(())
    }
}
