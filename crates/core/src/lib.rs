//! `ordering-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the ordering
//! bounded contexts (no infrastructure concerns).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, OrderId, ProductId, RestaurantId};
pub use money::Money;
pub use value_object::ValueObject;

#[doc(hidden)]
pub use uuid as __uuid;
