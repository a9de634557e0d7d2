//! Card aggregate - One profile card owned by a single account
//!
//! Identity (`id`, `owner`) is fixed at creation; the remaining fields are
//! either immutable or mutable only through the methods below, which the
//! registry invokes after authorizing the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::{AvailabilityChange, DescriptionUpdate, PortfolioUpdate};
use crate::ids::{AccountId, CardId};
use crate::value_objects::ImageReference;

/// The field values a caller supplies when creating a card.
///
/// Values are taken as-is: the registry performs no content validation on
/// creation, and the image reference keeps whatever shape it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDraft {
    pub name: String,
    pub title: String,
    pub image_reference: ImageReference,
    pub years_of_experience: u8,
    pub technologies: String,
    pub portfolio: String,
    pub contact: String,
}

/// A profile card
///
/// # Invariants
///
/// - `id` and `owner` never change after construction
/// - `description` is absent until first set, then replaced wholesale
/// - `open_to_work` starts true and only ever transitions true -> false
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    // Identity
    id: CardId,
    owner: AccountId,

    // Profile fields
    name: String,
    title: String,
    technologies: String,
    portfolio: String,
    contact: String,
    image_reference: ImageReference,
    description: Option<String>,
    years_of_experience: u8,
    open_to_work: bool,

    // Timestamps
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Card {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new card from a draft.
    ///
    /// New cards start open to work with no description.
    pub fn new(id: CardId, owner: AccountId, draft: CardDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            owner,
            name: draft.name,
            title: draft.title,
            technologies: draft.technologies,
            portfolio: draft.portfolio,
            contact: draft.contact,
            image_reference: draft.image_reference,
            description: None,
            years_of_experience: draft.years_of_experience,
            open_to_work: true,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[inline]
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn technologies(&self) -> &str {
        &self.technologies
    }

    #[inline]
    pub fn portfolio(&self) -> &str {
        &self.portfolio
    }

    #[inline]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    #[inline]
    pub fn image_reference(&self) -> &ImageReference {
        &self.image_reference
    }

    /// Returns the description, or `None` when it has never been set.
    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn years_of_experience(&self) -> u8 {
        self.years_of_experience
    }

    #[inline]
    pub fn open_to_work(&self) -> bool {
        self.open_to_work
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Check whether `account` owns this card.
    pub fn is_owned_by(&self, account: AccountId) -> bool {
        self.owner == account
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Replace the description wholesale.
    ///
    /// The previous value, if any, is discarded from the card and returned
    /// in the outcome for audit logging.
    pub fn set_description(
        &mut self,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DescriptionUpdate {
        let current = description.into();
        let previous = self.description.replace(current.clone());
        self.updated_at = now;
        DescriptionUpdate { previous, current }
    }

    /// Replace the portfolio link.
    pub fn set_portfolio(
        &mut self,
        portfolio: impl Into<String>,
        now: DateTime<Utc>,
    ) -> PortfolioUpdate {
        let current = portfolio.into();
        let previous = std::mem::replace(&mut self.portfolio, current.clone());
        self.updated_at = now;
        PortfolioUpdate { previous, current }
    }

    /// Close the card to work.
    ///
    /// Idempotent: closing an already-closed card is a no-op success.
    /// There is no transition back to open.
    pub fn deactivate(&mut self, now: DateTime<Utc>) -> AvailabilityChange {
        if !self.open_to_work {
            return AvailabilityChange::AlreadyInactive;
        }
        self.open_to_work = false;
        self.updated_at = now;
        AvailabilityChange::Deactivated
    }
}

// ============================================================================
// Tests
// ============================================================================
