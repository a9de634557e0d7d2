//! Mock payment facility for testing.

use std::sync::Mutex;

use async_trait::async_trait;

use cardfolio_domain::{AccountId, TokenAmount};

use crate::application::ports::outbound::{PaymentError, PaymentPort};

/// A settlement observed by the recording mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub payer: AccountId,
    pub payee: AccountId,
    pub amount: TokenAmount,
}

/// Payment mock that accepts every transfer and records it.
pub struct RecordingPaymentPort {
    settlements: Mutex<Vec<Settlement>>,
}

impl RecordingPaymentPort {
    pub fn new() -> Self {
        Self {
            settlements: Mutex::new(Vec::new()),
        }
    }

    /// Every settlement seen so far, in order.
    pub fn settlements(&self) -> Vec<Settlement> {
        self.settlements.lock().unwrap().clone()
    }
}

impl Default for RecordingPaymentPort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentPort for RecordingPaymentPort {
    async fn settle(
        &self,
        payer: AccountId,
        payee: AccountId,
        amount: TokenAmount,
    ) -> Result<(), PaymentError> {
        self.settlements.lock().unwrap().push(Settlement {
            payer,
            payee,
            amount,
        });
        Ok(())
    }
}

/// Payment mock that declines every transfer.
pub struct FailingPaymentPort;

#[async_trait]
impl PaymentPort for FailingPaymentPort {
    async fn settle(
        &self,
        _payer: AccountId,
        _payee: AccountId,
        _amount: TokenAmount,
    ) -> Result<(), PaymentError> {
        Err(PaymentError::Declined("payer balance too low".to_string()))
    }
}
