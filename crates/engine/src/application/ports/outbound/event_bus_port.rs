//! Event Bus Port - Interface for publishing registry notifications
//!
//! This port abstracts the notification fan-out, allowing the application
//! to publish events without knowing the underlying transport (in-process,
//! message queue, etc.)

use async_trait::async_trait;

use cardfolio_domain::Notification;

/// Port for publishing registry notifications
#[async_trait]
pub trait EventBusPort: Send + Sync {
    /// Publish a notification to the bus
    ///
    /// This is a best-effort operation; failures should be logged but must
    /// not roll back the state change that produced the notification.
    async fn publish(&self, notification: Notification) -> Result<(), EventBusError>;
}

/// Errors that can occur when publishing notifications
#[derive(Debug, thiserror::Error)]
pub enum EventBusError {
    /// Transport-level error (e.g., channel closed, network issue)
    #[error("event bus transport error: {0}")]
    Transport(String),
}
