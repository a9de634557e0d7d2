//! Payment Settlement Port - Interface to the external payment facility
//!
//! The registry never holds funds itself: an accepted card fee is
//! forwarded in full to the registry owner at creation time. Minting and
//! account balances live entirely on the other side of this port.

use async_trait::async_trait;

use cardfolio_domain::{AccountId, TokenAmount};

/// Port for settling payments between accounts
#[async_trait]
pub trait PaymentPort: Send + Sync {
    /// Transfer `amount` from `payer` to `payee`.
    async fn settle(
        &self,
        payer: AccountId,
        payee: AccountId,
        amount: TokenAmount,
    ) -> Result<(), PaymentError>;
}

/// Errors that can occur when settling a payment
#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentError {
    /// The payment facility refused the transfer.
    #[error("payment declined: {0}")]
    Declined(String),
    /// Transport-level error (e.g., the facility was unreachable).
    #[error("payment transport error: {0}")]
    Transport(String),
}
