use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a principal known to the registry: card owners, callers,
/// and the registry owner itself.
///
/// Accounts are resolved by the (out-of-scope) identity layer; the domain
/// only compares them for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AccountId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<AccountId> for Uuid {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

/// Sequential identity of a card, allocated by the registry counter.
///
/// The first card gets id 1; ids grow strictly and are never reused, even
/// for deactivated cards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CardId(u64);

impl CardId {
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CardId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<CardId> for u64 {
    fn from(value: CardId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_ids_are_unique() {
        assert_ne!(AccountId::new(), AccountId::new());
    }

    #[test]
    fn card_id_displays_as_bare_integer() {
        assert_eq!(CardId::from_u64(7).to_string(), "7");
    }

    #[test]
    fn card_id_orders_numerically() {
        assert!(CardId::from_u64(2) < CardId::from_u64(10));
    }

    #[test]
    fn card_id_serializes_as_number() {
        let json = serde_json::to_string(&CardId::from_u64(42)).unwrap();
        assert_eq!(json, "42");
    }
}
