//! Entity trait: identity + continuity across state changes.
//!
//! Records in this engine are value-shaped but still carry an opaque id so
//! the surrounding application can address them.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
