//! Identifier schemes and sequential ID allocation.

mod allocator;
mod kind;

pub use allocator::*;
pub use kind::*;

/// A record with a single sequential identifier.
pub trait Entity {
    /// Kind of record, which fixes the identifier scheme.
    const KIND: EntityKind;

    /// The record's identifier (e.g., "DOC014").
    fn id(&self) -> &str;
}

/// Suggest the next identifier for a freshly loaded list of records.
pub fn next_id_for<E: Entity>(records: &[E]) -> String {
    E::KIND.scheme().next(records.iter().map(E::id))
}
