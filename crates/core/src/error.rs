//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error for shared primitives.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// identifiers). Bounded contexts wrap it in their own error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. arithmetic overflow on money).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_reason() {
        assert_eq!(
            DomainError::validation("amount overflow").to_string(),
            "validation failed: amount overflow"
        );
        assert_eq!(
            DomainError::invalid_id("OrderId: bad").to_string(),
            "invalid identifier: OrderId: bad"
        );
    }
}
