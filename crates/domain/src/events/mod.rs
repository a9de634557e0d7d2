//! Registry Events
//!
//! Coarse-grained notifications describing committed registry state
//! changes, plus the outcome types returned by card mutations.
//!
//! Notifications are emitted fire-and-forget for external observers and
//! indexers; the registry never stores them as queryable state. The
//! `card_events` submodule contains return types from card mutations,
//! communicating what happened when state was modified.

pub mod card_events;

pub use card_events::{AvailabilityChange, DescriptionUpdate, PortfolioUpdate};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, CardId};

/// Registry event for committed state changes
///
/// Deactivating a card is the one mutation that emits no event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardEvent {
    CardCreated {
        id: CardId,
        name: String,
        owner: AccountId,
        title: String,
        contact: String,
    },
    DescriptionUpdated {
        name: String,
        owner: AccountId,
        new_description: String,
    },
    PortfolioUpdated {
        name: String,
        owner: AccountId,
        new_portfolio: String,
    },
}

impl CardEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CardCreated { .. } => "card_created",
            Self::DescriptionUpdated { .. } => "description_updated",
            Self::PortfolioUpdated { .. } => "portfolio_updated",
        }
    }

    /// The owner of the card the event concerns.
    pub fn owner(&self) -> AccountId {
        match self {
            Self::CardCreated { owner, .. } => *owner,
            Self::DescriptionUpdated { owner, .. } => *owner,
            Self::PortfolioUpdated { owner, .. } => *owner,
        }
    }
}

/// Timestamped envelope around a [`CardEvent`].
///
/// Immutable once constructed; the timestamp records when the state
/// change committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub occurred_at: DateTime<Utc>,
    pub event: CardEvent,
}

impl Notification {
    pub fn new(occurred_at: DateTime<Utc>, event: CardEvent) -> Self {
        Self {
            occurred_at,
            event,
        }
    }
}
