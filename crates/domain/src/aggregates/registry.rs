//! Registry aggregate - The collection of all cards
//!
//! The registry owns every card, allocates their ids from a strictly
//! increasing counter, and enforces the two rules every mutation shares:
//! the card must exist, and the caller must be its owner. It is pure
//! state; payment settlement, locking, and notification fan-out belong
//! to the engine that wraps it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::aggregates::card::{Card, CardDraft};
use crate::error::RegistryError;
use crate::events::{AvailabilityChange, DescriptionUpdate, PortfolioUpdate};
use crate::ids::{AccountId, CardId};
use crate::value_objects::TokenAmount;

/// The card collection and its creation/mutation rules
///
/// # Invariants
///
/// - Card ids start at 1, grow strictly, and are never reused; cards are
///   never removed
/// - The creation fee is an exact match, not a floor
/// - Only a card's owner can mutate it
///
/// # Example
///
/// ```
/// use cardfolio_domain::{AccountId, CardDraft, ImageReference, Registry, TokenAmount};
///
/// let owner = AccountId::new();
/// let caller = AccountId::new();
/// let mut registry = Registry::new(owner, TokenAmount::new(1));
///
/// let draft = CardDraft {
///     name: "Ada".to_string(),
///     title: "Engineer".to_string(),
///     image_reference: ImageReference::new("https://images.example.com/ada.png"),
///     years_of_experience: 9,
///     technologies: "Rust".to_string(),
///     portfolio: "https://ada.example.com".to_string(),
///     contact: "ada@example.com".to_string(),
/// };
///
/// let card = registry
///     .create_card(draft, TokenAmount::new(1), caller, chrono::Utc::now())
///     .expect("exact fee");
/// assert_eq!(card.id().as_u64(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    /// Recipient of every creation fee.
    owner: AccountId,
    /// The exact fee a caller pays to create a card.
    card_cost: TokenAmount,
    /// Id source; the next card gets `counter + 1`.
    counter: u64,
    cards: HashMap<CardId, Card>,
}

impl Registry {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(owner: AccountId, card_cost: TokenAmount) -> Self {
        Self {
            owner,
            card_cost,
            counter: 0,
            cards: HashMap::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The account that receives creation fees.
    #[inline]
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// The exact fee required to create a card.
    #[inline]
    pub fn card_cost(&self) -> TokenAmount {
        self.card_cost
    }

    /// Number of cards ever created.
    #[inline]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Create a card from `draft`, owned by `caller`.
    ///
    /// The payment must equal the card fee exactly; over- and underpayment
    /// are both rejected without touching the counter or the collection.
    /// Forwarding the accepted fee to the registry owner is the engine's
    /// responsibility.
    pub fn create_card(
        &mut self,
        draft: CardDraft,
        payment: TokenAmount,
        caller: AccountId,
        now: DateTime<Utc>,
    ) -> Result<&Card, RegistryError> {
        if payment != self.card_cost {
            return Err(RegistryError::insufficient_funds(payment, self.card_cost));
        }

        self.counter += 1;
        let id = CardId::from_u64(self.counter);
        let card = Card::new(id, caller, draft, now);

        // The counter is the only id source, so the slot is always vacant.
        Ok(self.cards.entry(id).or_insert(card))
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Replace the description of card `id`.
    pub fn update_description(
        &mut self,
        id: CardId,
        description: impl Into<String>,
        caller: AccountId,
        now: DateTime<Utc>,
    ) -> Result<DescriptionUpdate, RegistryError> {
        let card = self.owned_card_mut(id, caller)?;
        Ok(card.set_description(description, now))
    }

    /// Replace the portfolio link of card `id`.
    pub fn update_portfolio(
        &mut self,
        id: CardId,
        portfolio: impl Into<String>,
        caller: AccountId,
        now: DateTime<Utc>,
    ) -> Result<PortfolioUpdate, RegistryError> {
        let card = self.owned_card_mut(id, caller)?;
        Ok(card.set_portfolio(portfolio, now))
    }

    /// Close card `id` to work. Idempotent; there is no way back to open.
    pub fn deactivate(
        &mut self,
        id: CardId,
        caller: AccountId,
        now: DateTime<Utc>,
    ) -> Result<AvailabilityChange, RegistryError> {
        let card = self.owned_card_mut(id, caller)?;
        Ok(card.deactivate(now))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look up card `id`. Reads need no authorization.
    pub fn card(&self, id: CardId) -> Result<&Card, RegistryError> {
        self.cards
            .get(&id)
            .ok_or(RegistryError::CardNotFound { card: id })
    }

    /// All cards owned by `owner`, ordered by id.
    pub fn cards_by_owner(&self, owner: AccountId) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self
            .cards
            .values()
            .filter(|card| card.is_owned_by(owner))
            .collect();
        cards.sort_by_key(|card| card.id());
        cards
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// The authorization protocol every mutation shares: the card must
    /// exist and the caller must own it.
    fn owned_card_mut(
        &mut self,
        id: CardId,
        caller: AccountId,
    ) -> Result<&mut Card, RegistryError> {
        let card = self
            .cards
            .get_mut(&id)
            .ok_or(RegistryError::CardNotFound { card: id })?;
        if !card.is_owned_by(caller) {
            return Err(RegistryError::NotOwner { card: id, caller });
        }
        Ok(card)
    }
}

// ============================================================================
// Tests
// ============================================================================
