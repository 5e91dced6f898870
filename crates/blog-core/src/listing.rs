//! List view model.
//!
//! Composes the data flow of a list screen: fetched snapshot → filter →
//! page slice. The current page always stays within range; a criteria
//! change resets it to the first page.

use crate::domain::Entity;
use crate::filter::{FilterCriteria, Filterable};
use crate::pagination::{PageState, Pagination, PaginationError};
use crate::removal::{remove_tentatively, RemovalOutcome, TentativeRemoval};

#[derive(Debug, Clone)]
pub struct ListView<T> {
    items: Vec<T>,
    criteria: FilterCriteria,
    page: PageState,
}

impl<T: Entity + Filterable> ListView<T> {
    pub fn new(page_size: usize) -> Result<Self, PaginationError> {
        Ok(Self {
            items: Vec::new(),
            criteria: FilterCriteria::default(),
            page: PageState::new(page_size)?,
        })
    }

    /// List with a configured page size; zero is treated as 1.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            criteria: FilterCriteria::default(),
            page: PageState::at_least_one(page_size),
        }
    }

    /// Replace the snapshot after a fetch.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.clamp_page();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.page.reset();
        }
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        let criteria = FilterCriteria::new(text, self.criteria.key.clone());
        self.set_criteria(criteria);
    }

    pub fn set_key(&mut self, key: Option<String>) {
        let criteria = FilterCriteria::new(self.criteria.text.clone(), key);
        self.set_criteria(criteria);
    }

    fn filtered(&self) -> Vec<&T> {
        self.items.iter().filter(|item| self.criteria.matches(*item)).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    pub fn current_page(&self) -> usize {
        self.page.current()
    }

    pub fn page_count(&self) -> usize {
        self.page.paginator().page_count(self.filtered_len())
    }

    pub fn pagination(&self) -> Pagination {
        self.page
            .paginator()
            .paginate(self.filtered_len(), self.page.current())
    }

    /// Items on the current page, in snapshot order
    pub fn visible(&self) -> Vec<&T> {
        let filtered = self.filtered();
        let range = self.page.paginator().range(filtered.len(), self.page.current());
        filtered[range].to_vec()
    }

    pub fn go_to_page(&mut self, page: usize) {
        let count = self.page_count();
        self.page.go_to(page, count);
    }

    pub fn next_page(&mut self) {
        let count = self.page_count();
        self.page.next(count);
    }

    pub fn previous_page(&mut self) {
        self.page.previous();
    }

    pub fn remove_tentatively(&mut self, id: &T::Id) -> Option<TentativeRemoval<T>> {
        let removal = remove_tentatively(&mut self.items, id);
        self.clamp_page();
        removal
    }

    /// Settle a tentative removal against the API result.
    pub fn settle_removal<E: std::fmt::Display>(
        &mut self,
        removal: TentativeRemoval<T>,
        result: &Result<(), E>,
    ) -> RemovalOutcome {
        let outcome = removal.settle(&mut self.items, result);
        self.clamp_page();
        outcome
    }

    /// Put a removed row back without an API result to settle against.
    pub fn restore(&mut self, removal: TentativeRemoval<T>) {
        removal.restore(&mut self.items);
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        let count = self.page_count();
        self.page.clamp_to(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::pagination::PageLabel;

    fn categories(n: usize) -> Vec<Category> {
        (1..=n)
            .map(|i| Category::new(i.to_string(), format!("Category {}", i)))
            .collect()
    }

    #[test]
    fn test_visible_page() {
        let mut view = ListView::new(10).unwrap();
        view.replace_items(categories(25));
        view.go_to_page(3);
        let names: Vec<_> = view.visible().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names.len(), 5);
        assert_eq!(names[0], "Category 21");
        assert_eq!(
            view.pagination().labels,
            vec![PageLabel::Page(1), PageLabel::Page(2), PageLabel::Page(3)]
        );
    }

    #[test]
    fn test_query_resets_page() {
        let mut view = ListView::new(10).unwrap();
        view.replace_items(categories(25));
        view.go_to_page(3);
        view.set_query("category 1");
        assert_eq!(view.current_page(), 1);
        // "Category 1" and "Category 10".."Category 19"
        assert_eq!(view.filtered_len(), 11);
        assert_eq!(view.total_len(), 25);
    }

    #[test]
    fn test_same_query_keeps_page() {
        let mut view = ListView::new(5).unwrap();
        view.replace_items(categories(25));
        view.set_query("cat");
        view.go_to_page(4);
        view.set_query("cat");
        assert_eq!(view.current_page(), 4);
    }

    #[test]
    fn test_removal_clamps_page() {
        let mut view = ListView::new(10).unwrap();
        view.replace_items(categories(11));
        view.go_to_page(2);
        let removal = view.remove_tentatively(&"11".to_string()).unwrap();
        assert_eq!(view.current_page(), 1);
        let outcome = view.settle_removal(removal, &Err::<(), _>("offline"));
        assert!(matches!(outcome, RemovalOutcome::RolledBack { .. }));
        assert_eq!(view.total_len(), 11);
    }

    #[test]
    fn test_zero_configured_page_size_shows_one_per_page() {
        let mut view = ListView::with_page_size(0);
        view.replace_items(categories(3));
        assert_eq!(view.page_count(), 3);
        assert_eq!(view.visible().len(), 1);
    }

    #[test]
    fn test_out_of_range_page_request_is_clamped() {
        let mut view = ListView::new(10).unwrap();
        view.replace_items(categories(3));
        view.go_to_page(9);
        assert_eq!(view.current_page(), 1);
        view.next_page();
        assert_eq!(view.current_page(), 1);
        assert!(!view.pagination().has_controls());
    }

    #[test]
    fn test_restore_puts_row_back_in_place() {
        let mut view = ListView::new(10).unwrap();
        view.replace_items(categories(4));
        let removal = view.remove_tentatively(&"2".to_string()).unwrap();
        assert_eq!(view.total_len(), 3);
        view.restore(removal);
        let ids: Vec<_> = view.items().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }
}
