//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Cargo items and container dimensions are value objects.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Cargo {
///     safe: bool,
///     load_mass: f64,
/// }
///
/// impl ValueObject for Cargo {}
///
/// assert_eq!(Cargo { safe: true, load_mass: 200.0 }, Cargo { safe: true, load_mass: 200.0 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
