//! Card mutation outcomes
//!
//! These types communicate what happened when card state was modified,
//! allowing callers to react appropriately. The replaced values are
//! surfaced for audit logging only; system behavior never depends on
//! them.

/// Outcome of replacing a card's description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionUpdate {
    /// Value before the update; `None` when the description had never
    /// been set.
    pub previous: Option<String>,
    pub current: String,
}

/// Outcome of replacing a card's portfolio link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioUpdate {
    pub previous: String,
    pub current: String,
}

/// Outcome of closing a card to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityChange {
    /// The card was open and is now closed.
    Deactivated,
    /// The card was already closed; the call was a no-op success.
    AlreadyInactive,
}
