//! Article Entity
//!
//! Articles carry a rich-text (HTML) body and reference one category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Category summary embedded in an article payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

/// Author summary embedded in an article payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub username: String,
}

/// An article as returned by `GET /articles` and `GET /articles/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier
    pub id: String,
    pub title: String,
    /// HTML body produced by the editor
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub user: Option<Author>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Article {
    /// The referenced category id, from the flat field or the embedded summary
    pub fn category_id(&self) -> Option<&str> {
        self.category_id
            .as_deref()
            .or_else(|| self.category.as_ref().map(|c| c.id.as_str()))
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("Uncategorized")
    }

    pub fn author_name(&self) -> &str {
        self.user.as_ref().map(|u| u.username.as_str()).unwrap_or("")
    }
}

impl Entity for Article {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Other articles in the same category, excluding `exclude_id`, in API order.
pub fn related_articles(candidates: &[Article], category_id: &str, exclude_id: &str, limit: usize) -> Vec<Article> {
    candidates
        .iter()
        .filter(|a| a.id != exclude_id && a.category_id() == Some(category_id))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn article(id: &str, title: &str, category: &str) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            content: format!("<p>{}</p>", title),
            created_at: DateTime::parse_from_rfc3339("2025-05-01T08:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            category_id: Some(category.to_string()),
            category: Some(CategoryRef {
                id: category.to_string(),
                name: format!("Category {}", category),
            }),
            user: None,
            image_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::article;
    use super::*;

    #[test]
    fn test_article_from_api_json() {
        let json = r#"{
            "id": "a1",
            "userId": "u1",
            "categoryId": "c1",
            "title": "Hello",
            "content": "<p>Body</p>",
            "imageUrl": "https://img.example/1.png",
            "createdAt": "2025-04-02T10:00:00.000Z",
            "updatedAt": "2025-04-02T10:00:00.000Z",
            "category": {"id": "c1", "userId": "u1", "name": "Design", "createdAt": "x"},
            "user": {"id": "u1", "username": "maya", "role": "Admin"}
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id(), "a1");
        assert_eq!(article.category_id(), Some("c1"));
        assert_eq!(article.category_name(), "Design");
        assert_eq!(article.author_name(), "maya");
        assert_eq!(article.image_url.as_deref(), Some("https://img.example/1.png"));
    }

    #[test]
    fn test_category_id_falls_back_to_embedded() {
        let mut a = article("a1", "T", "c7");
        a.category_id = None;
        assert_eq!(a.category_id(), Some("c7"));
        a.category = None;
        assert_eq!(a.category_id(), None);
        assert_eq!(a.category_name(), "Uncategorized");
    }

    #[test]
    fn test_related_articles() {
        let all = vec![
            article("a1", "One", "c1"),
            article("a2", "Two", "c1"),
            article("a3", "Three", "c2"),
            article("a4", "Four", "c1"),
            article("a5", "Five", "c1"),
            article("a6", "Six", "c1"),
        ];
        let related = related_articles(&all, "c1", "a2", 3);
        let ids: Vec<_> = related.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a4", "a5"]);
    }
}
