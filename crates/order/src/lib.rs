//! Order domain module.
//!
//! This crate contains the business rules of the Order aggregate: how an order
//! is constructed, bound to its line items, validated and moved through its
//! status lifecycle. It is pure, deterministic domain logic (no IO, no HTTP,
//! no storage); persistence and transport are the caller's concern.
//!
//! Every operation takes the aggregate by `&mut`/`&`, so a caller sharing an
//! order across tasks must serialize access itself (e.g. behind a `Mutex`).

pub mod error;
pub mod events;
pub mod item;
pub mod order;
pub mod restaurant;
pub mod service;
pub mod value_objects;

pub use error::{OrderDomainError, OrderResult};
pub use events::{OrderCancelled, OrderCreated, OrderEvent, OrderPaid};
pub use item::OrderItem;
pub use order::{Order, OrderDraft, OrderState};
pub use restaurant::{Product, Restaurant};
pub use service::OrderDomainService;
pub use value_objects::{OrderItemId, OrderStatus, StreetAddress, TrackingId};
