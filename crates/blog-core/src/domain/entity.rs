//! Domain Layer - Core Entity Trait
//!
//! All records fetched from the API carry a unique identifier.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Find an entity by id in a fetched snapshot.
pub fn find_by_id<'a, T: Entity>(items: &'a [T], id: &T::Id) -> DomainResult<&'a T> {
    items
        .iter()
        .find(|item| item.id() == id)
        .ok_or_else(|| DomainError::NotFound(format!("{:?}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn test_find_by_id() {
        let items = vec![Category::new("c1", "Design"), Category::new("c2", "Tech")];
        assert_eq!(find_by_id(&items, &"c2".to_string()).unwrap().name, "Tech");
        assert!(matches!(
            find_by_id(&items, &"nope".to_string()),
            Err(DomainError::NotFound(_))
        ));
    }
}
