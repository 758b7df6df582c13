use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordering_core::{CustomerId, Money, OrderId, RestaurantId};
use ordering_events::Event;

use crate::value_objects::TrackingId;

/// Event: OrderCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub order_id: OrderId,
    pub tracking_id: TrackingId,
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub price: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OrderPaid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaid {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub price: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OrderCancelled (payment must be rolled back).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCancelled {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub price: Money,
    pub failure_messages: Vec<String>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    OrderCreated(OrderCreated),
    OrderPaid(OrderPaid),
    OrderCancelled(OrderCancelled),
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderCreated(_) => "order.created",
            OrderEvent::OrderPaid(_) => "order.paid",
            OrderEvent::OrderCancelled(_) => "order.cancelled",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::OrderCreated(e) => e.occurred_at,
            OrderEvent::OrderPaid(e) => e.occurred_at,
            OrderEvent::OrderCancelled(e) => e.occurred_at,
        }
    }
}

impl From<OrderCreated> for OrderEvent {
    fn from(event: OrderCreated) -> Self {
        OrderEvent::OrderCreated(event)
    }
}

impl From<OrderPaid> for OrderEvent {
    fn from(event: OrderPaid) -> Self {
        OrderEvent::OrderPaid(event)
    }
}

impl From<OrderCancelled> for OrderEvent {
    fn from(event: OrderCancelled) -> Self {
        OrderEvent::OrderCancelled(event)
    }
}
