//! Card Service - Application service for the card registry
//!
//! Use case implementations for creating, mutating, and reading cards.
//! Every mutating operation holds the registry write lock for its full
//! duration: fee validation, payment settlement, the mutation itself, and
//! the notification publish all happen inside one exclusive section, so
//! operations execute as serialized all-or-nothing steps and observers
//! only ever see notifications for committed changes, in commit order.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use cardfolio_domain::{
    AccountId, AvailabilityChange, CardDraft, CardEvent, CardId, Notification, Registry,
    RegistryError, TokenAmount,
};

use crate::application::dto::CardView;
use crate::application::ports::outbound::{ClockPort, EventBusPort, PaymentError, PaymentPort};

/// Errors surfaced by the card service
///
/// Registry rule violations pass through unchanged so callers can match
/// the exact failure; settlement problems get their own variant. Either
/// way the operation left no partial state behind, and resubmitting with
/// corrected input is the caller's decision.
#[derive(Debug, thiserror::Error)]
pub enum CardServiceError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("payment settlement failed: {0}")]
    Payment(#[source] PaymentError),
}

/// Card service trait defining the application use cases
#[async_trait]
pub trait CardService: Send + Sync {
    /// Create a card for `caller`, paying the exact card fee.
    ///
    /// The fee is forwarded in full to the registry owner before the card
    /// is inserted; a mismatched payment is rejected before any funds
    /// move.
    async fn create_card(
        &self,
        draft: CardDraft,
        payment: TokenAmount,
        caller: AccountId,
    ) -> Result<CardId, CardServiceError>;

    /// Replace the description of card `id`. Owner only.
    async fn update_description(
        &self,
        id: CardId,
        new_description: String,
        caller: AccountId,
    ) -> Result<(), CardServiceError>;

    /// Replace the portfolio link of card `id`. Owner only.
    async fn update_portfolio(
        &self,
        id: CardId,
        new_portfolio: String,
        caller: AccountId,
    ) -> Result<(), CardServiceError>;

    /// Close card `id` to work. Owner only; idempotent; emits nothing.
    async fn deactivate(&self, id: CardId, caller: AccountId) -> Result<(), CardServiceError>;

    /// Look up card `id`. Reads are public and need no authorization.
    async fn get_card(&self, id: CardId) -> Result<CardView, CardServiceError>;

    /// Number of cards ever created.
    async fn card_count(&self) -> usize;

    /// All cards owned by `owner`, ordered by id.
    async fn get_cards_by_owner(&self, owner: AccountId) -> Vec<CardView>;
}

/// Default implementation of CardService using port abstractions
pub struct CardServiceImpl {
    registry: RwLock<Registry>,
    payments: Arc<dyn PaymentPort>,
    event_bus: Arc<dyn EventBusPort>,
    clock: Arc<dyn ClockPort>,
}

impl CardServiceImpl {
    /// Create a new CardServiceImpl around an existing registry.
    pub fn new(
        registry: Registry,
        payments: Arc<dyn PaymentPort>,
        event_bus: Arc<dyn EventBusPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            registry: RwLock::new(registry),
            payments,
            event_bus,
            clock,
        }
    }

    /// Publish a notification, logging instead of failing on bus errors.
    async fn publish(&self, occurred_at: DateTime<Utc>, event: CardEvent) {
        let notification = Notification::new(occurred_at, event);
        if let Err(e) = self.event_bus.publish(notification).await {
            warn!(error = %e, "failed to publish registry notification");
        }
    }
}

#[async_trait]
impl CardService for CardServiceImpl {
    #[instrument(skip(self, draft), fields(caller = %caller, name = %draft.name))]
    async fn create_card(
        &self,
        draft: CardDraft,
        payment: TokenAmount,
        caller: AccountId,
    ) -> Result<CardId, CardServiceError> {
        let mut registry = self.registry.write().await;

        // Reject a mismatched fee before any funds move.
        let required = registry.card_cost();
        if payment != required {
            return Err(RegistryError::insufficient_funds(payment, required).into());
        }

        self.payments
            .settle(caller, registry.owner(), payment)
            .await
            .map_err(CardServiceError::Payment)?;

        let now = self.clock.now();
        let (id, event) = {
            let card = registry.create_card(draft, payment, caller, now)?;
            (
                card.id(),
                CardEvent::CardCreated {
                    id: card.id(),
                    name: card.name().to_string(),
                    owner: card.owner(),
                    title: card.title().to_string(),
                    contact: card.contact().to_string(),
                },
            )
        };

        info!(card_id = %id, "created card owned by {caller}");
        self.publish(now, event).await;
        Ok(id)
    }

    #[instrument(skip(self, new_description), fields(card_id = %id, caller = %caller))]
    async fn update_description(
        &self,
        id: CardId,
        new_description: String,
        caller: AccountId,
    ) -> Result<(), CardServiceError> {
        let mut registry = self.registry.write().await;
        let now = self.clock.now();

        let update = registry.update_description(id, new_description, caller, now)?;
        // The replaced value surfaces only in the audit log.
        debug!(previous = ?update.previous, "replaced card description");

        let card = registry.card(id)?;
        let event = CardEvent::DescriptionUpdated {
            name: card.name().to_string(),
            owner: card.owner(),
            new_description: update.current,
        };

        info!("updated description of card {id}");
        self.publish(now, event).await;
        Ok(())
    }

    #[instrument(skip(self, new_portfolio), fields(card_id = %id, caller = %caller))]
    async fn update_portfolio(
        &self,
        id: CardId,
        new_portfolio: String,
        caller: AccountId,
    ) -> Result<(), CardServiceError> {
        let mut registry = self.registry.write().await;
        let now = self.clock.now();

        let update = registry.update_portfolio(id, new_portfolio, caller, now)?;
        debug!(previous = %update.previous, "replaced card portfolio");

        let card = registry.card(id)?;
        let event = CardEvent::PortfolioUpdated {
            name: card.name().to_string(),
            owner: card.owner(),
            new_portfolio: update.current,
        };

        info!("updated portfolio of card {id}");
        self.publish(now, event).await;
        Ok(())
    }

    #[instrument(skip(self), fields(card_id = %id, caller = %caller))]
    async fn deactivate(&self, id: CardId, caller: AccountId) -> Result<(), CardServiceError> {
        let mut registry = self.registry.write().await;
        let now = self.clock.now();

        match registry.deactivate(id, caller, now)? {
            AvailabilityChange::Deactivated => info!("card {id} closed to work"),
            AvailabilityChange::AlreadyInactive => debug!("card {id} was already closed to work"),
        }

        // Closing a card is deliberately silent: no notification goes out,
        // unlike description and portfolio updates.
        Ok(())
    }

    #[instrument(skip(self), fields(card_id = %id))]
    async fn get_card(&self, id: CardId) -> Result<CardView, CardServiceError> {
        let registry = self.registry.read().await;
        let card = registry.card(id)?;
        Ok(CardView::from(card))
    }

    async fn card_count(&self) -> usize {
        self.registry.read().await.card_count()
    }

    #[instrument(skip(self), fields(owner = %owner))]
    async fn get_cards_by_owner(&self, owner: AccountId) -> Vec<CardView> {
        let registry = self.registry.read().await;
        registry
            .cards_by_owner(owner)
            .into_iter()
            .map(CardView::from)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
