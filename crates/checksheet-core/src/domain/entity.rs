//! Domain Layer - Core Entity Trait
//!
//! Contract shared by patterns and check items: both are addressed by an
//! opaque generated identifier.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// First entity with `id` in an ordered collection
pub fn find_by_id<'a, E: Entity>(entities: &'a [E], id: &E::Id) -> Option<&'a E> {
    entities.iter().find(|entity| entity.id() == id)
}

pub fn find_by_id_mut<'a, E: Entity>(entities: &'a mut [E], id: &E::Id) -> Option<&'a mut E> {
    entities.iter_mut().find(|entity| entity.id() == id)
}

pub fn position_by_id<E: Entity>(entities: &[E], id: &E::Id) -> Option<usize> {
    entities.iter().position(|entity| entity.id() == id)
}

/// Drop every entity with `id`, keeping the order of the rest.
/// Returns whether anything was removed.
pub fn remove_by_id<E: Entity>(entities: &mut Vec<E>, id: &E::Id) -> bool {
    let before = entities.len();
    entities.retain(|entity| entity.id() != id);
    entities.len() != before
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Neither is fatal: the editor reports them and leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("pattern index {0} does not exist")]
    PatternNotFound(usize),
    #[error("pattern limit reached (max {max})")]
    CapacityReached { max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        label: &'static str,
    }

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, label: "a" },
            Row { id: 2, label: "b" },
            Row { id: 3, label: "c" },
        ]
    }

    #[test]
    fn test_lookup_by_id() {
        let mut rows = rows();
        assert_eq!(find_by_id(&rows, &2).map(|r| r.label), Some("b"));
        assert_eq!(position_by_id(&rows, &3), Some(2));
        assert!(find_by_id(&rows, &9).is_none());

        if let Some(row) = find_by_id_mut(&mut rows, &1) {
            row.label = "z";
        }
        assert_eq!(rows[0].label, "z");
    }

    #[test]
    fn test_remove_by_id_keeps_order() {
        let mut rows = rows();
        assert!(remove_by_id(&mut rows, &2));
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(!remove_by_id(&mut rows, &2));
        assert_eq!(rows.len(), 2);
    }
}
