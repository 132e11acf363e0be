//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Every record kept by the entity store implements this, which is what lets
/// the store index records by identifier.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Human-readable kind, used in `NotFound` errors and log fields.
    const KIND: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
