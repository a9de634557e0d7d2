//! Mock event bus for testing.

use std::sync::Mutex;

use async_trait::async_trait;

use cardfolio_domain::Notification;

use crate::application::ports::outbound::{EventBusError, EventBusPort};

/// Event bus mock that records every published notification.
pub struct RecordingEventBus {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingEventBus {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
        }
    }

    /// Every notification seen so far, in publish order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Default for RecordingEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBusPort for RecordingEventBus {
    async fn publish(&self, notification: Notification) -> Result<(), EventBusError> {
        self.notifications.lock().unwrap().push(notification);
        Ok(())
    }
}

/// Event bus mock whose transport always fails.
pub struct FailingEventBus;

#[async_trait]
impl EventBusPort for FailingEventBus {
    async fn publish(&self, _notification: Notification) -> Result<(), EventBusError> {
        Err(EventBusError::Transport("bus is down".to_string()))
    }
}
