//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identity may be assigned late: entities owned by an aggregate receive
/// their identifier when the aggregate binds them, so `id()` is `None` until then.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if one has been assigned.
    fn id(&self) -> Option<&Self::Id>;
}
