//! Client-side list filtering.
//!
//! A text query matches one designated field case-insensitively; an optional
//! key matches a foreign-key field exactly. Both are ANDed and input order
//! is preserved.

use crate::domain::{Article, Category};

/// Entities that can be narrowed by [`FilterCriteria`]
pub trait Filterable {
    /// Field the text query is matched against
    fn search_field(&self) -> &str;

    /// Field the exact key is matched against
    fn filter_key(&self) -> Option<&str> {
        None
    }
}

impl Filterable for Article {
    fn search_field(&self) -> &str {
        &self.title
    }

    fn filter_key(&self) -> Option<&str> {
        self.category_id()
    }
}

impl Filterable for Category {
    fn search_field(&self) -> &str {
        &self.name
    }
}

/// Current search / key constraint of a list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub text: String,
    pub key: Option<String>,
}

impl FilterCriteria {
    pub fn new(text: impl Into<String>, key: Option<String>) -> Self {
        Self {
            text: text.into(),
            key,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    /// An empty key string counts as no key.
    fn active_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.active_key().is_none()
    }

    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        let key_ok = match self.active_key() {
            Some(key) => item.filter_key() == Some(key),
            None => true,
        };
        key_ok && self.text_matches(item.search_field())
    }

    fn text_matches(&self, field: &str) -> bool {
        if self.text.is_empty() {
            return true;
        }
        field.to_lowercase().contains(&self.text.to_lowercase())
    }
}

pub fn filter_items<'a, T: Filterable>(items: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    items.iter().filter(|item| criteria.matches(*item)).collect()
}

pub fn filter_cloned<T: Filterable + Clone>(items: &[T], criteria: &FilterCriteria) -> Vec<T> {
    items
        .iter()
        .filter(|item| criteria.matches(*item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        title: &'static str,
        cat: &'static str,
    }

    impl Filterable for Row {
        fn search_field(&self) -> &str {
            self.title
        }

        fn filter_key(&self) -> Option<&str> {
            Some(self.cat)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { title: "A", cat: "1" },
            Row { title: "AB", cat: "2" },
            Row { title: "B", cat: "1" },
        ]
    }

    #[test]
    fn test_text_and_key_are_anded() {
        let criteria = FilterCriteria::new("a", Some("1".into()));
        assert_eq!(filter_cloned(&rows(), &criteria), vec![Row { title: "A", cat: "1" }]);
    }

    #[test]
    fn test_empty_criteria_keeps_everything_in_order() {
        let items = rows();
        assert_eq!(filter_cloned(&items, &FilterCriteria::default()), items);
        assert_eq!(filter_cloned(&items, &FilterCriteria::new("", Some(String::new()))), items);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let items = rows();
        let hits = filter_items(&items, &FilterCriteria::text("b"));
        assert_eq!(hits.iter().map(|r| r.title).collect::<Vec<_>>(), vec!["AB", "B"]);
    }

    #[test]
    fn test_idempotent() {
        let criteria = FilterCriteria::new("a", None);
        let once = filter_cloned(&rows(), &criteria);
        let twice = filter_cloned(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_has_no_key() {
        let cats = vec![Category::new("1", "Design"), Category::new("2", "Tech")];
        let keyed = FilterCriteria::new("", Some("1".into()));
        assert!(filter_items(&cats, &keyed).is_empty());
        assert_eq!(filter_items(&cats, &FilterCriteria::text("DES")).len(), 1);
    }
}
