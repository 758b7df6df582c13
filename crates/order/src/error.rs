use thiserror::Error;

use ordering_core::{DomainError, Money, RestaurantId};

use crate::value_objects::OrderStatus;

pub type OrderResult<T> = Result<T, OrderDomainError>;

/// Violation of an Order business rule.
///
/// Raised, never silently corrected. These represent invalid input or an
/// invalid call sequence, so nothing in this crate retries them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderDomainError {
    /// The order (or one of its items) is not in the state the operation requires.
    #[error("invalid order state: {0}")]
    InvalidState(String),

    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Declared order total differs from the sum of item subtotals.
    #[error("order total {expected} does not match sum of item subtotals {actual}")]
    TotalMismatch { expected: Money, actual: Money },

    #[error("cannot {action} an order in status {from}")]
    InvalidTransition {
        from: OrderStatus,
        action: &'static str,
    },

    #[error("restaurant {0} is not active")]
    RestaurantUnavailable(RestaurantId),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl OrderDomainError {
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }
}
