//! Engine configuration loaded from the environment.

use cardfolio_domain::TokenAmount;

/// Fallback card fee when the environment does not set one.
const DEFAULT_CARD_COST: u64 = 1;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The exact fee a caller pays to create a card.
    pub card_cost: TokenAmount,
    /// Capacity of the in-process notification channel.
    pub event_capacity: usize,
}

impl EngineConfig {
    /// Load configuration from the environment.
    ///
    /// Reads an optional `.env` file first, then `CARDFOLIO_CARD_COST`
    /// and `CARDFOLIO_EVENT_CAPACITY`, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let card_cost: u64 = std::env::var("CARDFOLIO_CARD_COST")
            .unwrap_or_else(|_| DEFAULT_CARD_COST.to_string())
            .parse()
            .unwrap_or(DEFAULT_CARD_COST);
        let event_capacity: usize = std::env::var("CARDFOLIO_EVENT_CAPACITY")
            .unwrap_or_else(|_| "256".to_string())
            .parse()
            .unwrap_or(256);

        Self {
            card_cost: TokenAmount::new(card_cost),
            event_capacity,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            card_cost: TokenAmount::new(DEFAULT_CARD_COST),
            event_capacity: 256,
        }
    }
}
