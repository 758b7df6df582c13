//! Aggregate root trait.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// The aggregate root is the single entry point that enforces consistency
/// rules across the entities it owns. Callers must hold exclusive access
/// (`&mut`) while running any state transition.
pub trait AggregateRoot: Entity {
    /// Whether the aggregate has been assigned its identity.
    fn is_initialized(&self) -> bool {
        self.id().is_some()
    }
}
