//! Unified error types for the registry domain
//!
//! Every failure a registry operation can produce is one of these
//! variants, so callers can distinguish outcomes without string matching.
//! All of them are terminal: the registry never retries internally, and a
//! failed operation leaves no partial state behind.

use thiserror::Error;

use crate::ids::{AccountId, CardId};
use crate::value_objects::TokenAmount;

/// Unified error type for registry operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Creation payment did not match the card fee exactly.
    #[error("insufficient funds: payment of {paid} does not match the card fee of {required}")]
    InsufficientFunds {
        paid: TokenAmount,
        required: TokenAmount,
    },

    /// Caller tried to mutate a card it does not own.
    #[error("account {caller} does not own card {card}")]
    NotOwner { card: CardId, caller: AccountId },

    /// No card exists under the given id.
    #[error("card not found: {card}")]
    CardNotFound { card: CardId },
}

impl RegistryError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(paid: TokenAmount, required: TokenAmount) -> Self {
        Self::InsufficientFunds { paid, required }
    }

    /// Create a not owner error
    pub fn not_owner(card: CardId, caller: AccountId) -> Self {
        Self::NotOwner { card, caller }
    }

    /// Create a card not found error
    pub fn card_not_found(card: CardId) -> Self {
        Self::CardNotFound { card }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_error() {
        let err = RegistryError::insufficient_funds(TokenAmount::new(2), TokenAmount::new(1));
        assert!(matches!(err, RegistryError::InsufficientFunds { .. }));
        assert_eq!(
            err.to_string(),
            "insufficient funds: payment of 2 does not match the card fee of 1"
        );
    }

    #[test]
    fn test_not_owner_error() {
        let caller = AccountId::new();
        let err = RegistryError::not_owner(CardId::from_u64(3), caller);
        assert!(matches!(err, RegistryError::NotOwner { .. }));
        assert!(err.to_string().contains("card 3"));
        assert!(err.to_string().contains(&caller.to_string()));
    }

    #[test]
    fn test_card_not_found_error() {
        let err = RegistryError::card_not_found(CardId::from_u64(99));
        assert_eq!(err.to_string(), "card not found: 99");
    }
}
