use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_core::{ValueObject, impl_uuid_newtype};

/// Customer-facing tracking identifier, assigned when the order is initialized.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(Uuid);

impl_uuid_newtype!(TrackingId, "TrackingId");

/// Position of a line item within its order (1-based).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(u64);

impl OrderItemId {
    pub const fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for OrderItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Delivery address carried on the order; opaque to the order rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreetAddress {
    pub id: Uuid,
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

impl ValueObject for StreetAddress {}

impl StreetAddress {
    pub fn new(
        id: Uuid,
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            street: street.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }
}

/// Order status lifecycle.
///
/// `Pending` is assigned on initialization. From there an order is paid and
/// approved, or goes through `Cancelling` to `Cancelled`, or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Approved,
    Cancelling,
    Cancelled,
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Approved => "approved",
            OrderStatus::Cancelling => "cancelling",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Failed => "failed",
        }
    }

    /// No further transitions are possible from a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Approved | OrderStatus::Cancelled | OrderStatus::Failed
        )
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
