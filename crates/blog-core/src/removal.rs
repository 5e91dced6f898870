//! Tentative removal with rollback.
//!
//! A row disappears from the local list as soon as the user confirms a
//! delete. The removal is committed when the API succeeds, or rolled back
//! to its original position when it fails.

use crate::domain::Entity;

/// A row taken out of a list, pending the API's verdict
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a tentative removal must be committed or rolled back"]
pub struct TentativeRemoval<T> {
    index: usize,
    item: T,
}

/// Final state of a tentative removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Committed,
    RolledBack { reason: String },
}

/// Remove the entity with `id` from `items`, remembering where it was.
pub fn remove_tentatively<T: Entity>(items: &mut Vec<T>, id: &T::Id) -> Option<TentativeRemoval<T>> {
    let index = items.iter().position(|item| item.id() == id)?;
    let item = items.remove(index);
    Some(TentativeRemoval { index, item })
}

impl<T: Entity> TentativeRemoval<T> {
    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Accept the removal
    pub fn commit(self) -> RemovalOutcome {
        log::debug!("removal committed id={:?}", self.item.id());
        RemovalOutcome::Committed
    }

    /// Put the row back where it was (or at the end if the list shrank).
    pub fn rollback(self, items: &mut Vec<T>, reason: impl Into<String>) -> RemovalOutcome {
        let reason = reason.into();
        log::warn!("removal rolled back id={:?} reason={}", self.item.id(), reason);
        self.reinsert(items);
        RemovalOutcome::RolledBack { reason }
    }

    /// Undo the removal without a failure to report.
    pub fn restore(self, items: &mut Vec<T>) -> usize {
        log::debug!("removal undone id={:?}", self.item.id());
        self.reinsert(items)
    }

    fn reinsert(self, items: &mut Vec<T>) -> usize {
        let index = self.index.min(items.len());
        items.insert(index, self.item);
        index
    }

    /// Commit on `Ok`, roll back on `Err`.
    pub fn settle<E: std::fmt::Display>(self, items: &mut Vec<T>, result: &Result<(), E>) -> RemovalOutcome {
        match result {
            Ok(()) => self.commit(),
            Err(e) => self.rollback(items, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn cats() -> Vec<Category> {
        vec![
            Category::new("1", "One"),
            Category::new("2", "Two"),
            Category::new("3", "Three"),
        ]
    }

    #[test]
    fn test_commit_keeps_row_out() {
        let mut items = cats();
        let removal = remove_tentatively(&mut items, &"2".to_string()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(removal.commit(), RemovalOutcome::Committed);
        assert!(items.iter().all(|c| c.id != "2"));
    }

    #[test]
    fn test_rollback_restores_position() {
        let mut items = cats();
        let removal = remove_tentatively(&mut items, &"2".to_string()).unwrap();
        assert_eq!(removal.index(), 1);
        let outcome = removal.rollback(&mut items, "boom");
        assert_eq!(outcome, RemovalOutcome::RolledBack { reason: "boom".into() });
        assert_eq!(items, cats());
    }

    #[test]
    fn test_rollback_after_list_shrank() {
        let mut items = cats();
        let removal = remove_tentatively(&mut items, &"3".to_string()).unwrap();
        items.clear();
        let _ = removal.rollback(&mut items, "late failure");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "3");
    }

    #[test]
    fn test_restore_returns_insert_position() {
        let mut items = cats();
        let removal = remove_tentatively(&mut items, &"3".to_string()).unwrap();
        items.truncate(1);
        assert_eq!(removal.restore(&mut items), 1);
        let ids: Vec<&str> = items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_missing_id() {
        let mut items = cats();
        assert!(remove_tentatively(&mut items, &"9".to_string()).is_none());
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_settle() {
        let mut items = cats();
        let removal = remove_tentatively(&mut items, &"1".to_string()).unwrap();
        let failed: Result<(), String> = Err("HTTP 500".into());
        assert!(matches!(removal.settle(&mut items, &failed), RemovalOutcome::RolledBack { .. }));
        assert_eq!(items[0].id, "1");
    }
}
