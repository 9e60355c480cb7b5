//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Containers are entities keyed by their serial number: two containers with the
/// same serial number are the same container, whatever cargo they currently hold.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
