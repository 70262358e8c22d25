//! Surrogate identity shared by every mapped record.
//!
//! # Invariants
//! - `id` is `None` until the row is inserted by the storage engine.
//! - Once assigned, an id is never changed or reused within its table.

/// Storage-generated surrogate key (`INTEGER PRIMARY KEY AUTOINCREMENT`).
pub type EntityId = i64;

/// Implemented by every record that maps to one table row.
pub trait Identifiable {
    /// Returns the generated id, or `None` for a record that was never persisted.
    fn id(&self) -> Option<EntityId>;

    /// Returns whether the storage engine has assigned an id.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityId, Identifiable};

    struct Probe(Option<EntityId>);

    impl Identifiable for Probe {
        fn id(&self) -> Option<EntityId> {
            self.0
        }
    }

    #[test]
    fn unsaved_record_is_not_persisted() {
        assert!(!Probe(None).is_persisted());
    }

    #[test]
    fn record_with_id_is_persisted() {
        let probe = Probe(Some(7));
        assert!(probe.is_persisted());
        assert_eq!(probe.id(), Some(7));
    }
}
