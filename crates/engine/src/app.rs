//! Application state and composition.
//!
//! The registry is a single shared service object: a host constructs one
//! `App` at startup and passes it by handle to every request handler.
//! There is no ambient or static registry state.

use std::sync::Arc;

use tokio::sync::broadcast;

use cardfolio_domain::{AccountId, Notification, Registry};

use crate::application::ports::outbound::PaymentPort;
use crate::application::services::{CardService, CardServiceImpl};
use crate::infrastructure::{EngineConfig, InProcessEventBus, SystemClock};

/// Main application state.
///
/// Holds the card service and the notification bus observers subscribe to.
pub struct App {
    pub cards: Arc<dyn CardService>,
    event_bus: Arc<InProcessEventBus>,
}

impl App {
    /// Compose the application.
    ///
    /// `registry_owner` receives every card creation fee; `payments` is
    /// the host's adapter for the external payment facility.
    pub fn new(
        config: &EngineConfig,
        registry_owner: AccountId,
        payments: Arc<dyn PaymentPort>,
    ) -> Self {
        let event_bus = Arc::new(InProcessEventBus::new(config.event_capacity));
        let registry = Registry::new(registry_owner, config.card_cost);
        let cards = Arc::new(CardServiceImpl::new(
            registry,
            payments,
            event_bus.clone(),
            Arc::new(SystemClock::new()),
        ));

        Self { cards, event_bus }
    }

    /// Subscribe to registry notifications published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.event_bus.subscribe()
    }
}
