//! Request / response payloads
//!
//! Field names follow the API's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::domain::{Article, Role};

/// `{ data, total, page, limit, totalPages }` list envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub total_pages: Option<usize>,
}

impl<T> Paged<T> {
    pub fn total(&self) -> usize {
        self.total.unwrap_or(self.data.len())
    }

    /// Server page count, or derived from `total` and `page_size`.
    pub fn total_pages(&self, page_size: usize) -> usize {
        match self.total_pages {
            Some(pages) if pages > 0 => pages,
            _ => self.total().div_ceil(page_size.max(1)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Query string of `GET /articles`; empty filters are omitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleQuery {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,
    pub page: usize,
    pub limit: usize,
    pub sort_by: &'static str,
    pub sort_order: SortOrder,
}

impl ArticleQuery {
    /// Newest first, page 1
    pub fn newest(limit: usize) -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            page: 1,
            limit,
            sort_by: "createdAt",
            sort_order: SortOrder::Desc,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn at_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    pub title: String,
    pub content: String,
    pub category_id: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// A file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(alias = "imageUrl")]
    pub url: String,
}

/// Unsaved article form, kept in browser storage for the preview page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleDraft {
    /// Set when the draft edits an existing article
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
    pub title: String,
    pub category_id: String,
    pub content: String,
    pub image_url: String,
}

impl ArticleDraft {
    /// Form state for editing `article`.
    pub fn from_article(article: &Article) -> Self {
        Self {
            article_id: Some(article.id.clone()),
            title: article.title.clone(),
            category_id: article.category_id().unwrap_or_default().to_string(),
            content: article.content.clone(),
            image_url: article.image_url.clone().unwrap_or_default(),
        }
    }

    /// Whether this draft belongs to the form for `article_id` (`None` = create).
    pub fn belongs_to(&self, article_id: Option<&str>) -> bool {
        self.article_id.as_deref() == article_id
    }

    pub fn to_payload(&self) -> ArticlePayload {
        ArticlePayload {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            category_id: self.category_id.clone(),
            image_url: Some(self.image_url.clone()).filter(|u| !u.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_omits_empty_filters() {
        let q = ArticleQuery::newest(9).at_page(2);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 2, "limit": 9, "sortBy": "createdAt", "sortOrder": "desc"})
        );
        let q = q.with_title("rust").with_category("c1");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["title"], "rust");
        assert_eq!(json["category"], "c1");
    }

    #[test]
    fn test_paged_totals() {
        let paged: Paged<u32> = serde_json::from_str(r#"{"data":[1,2,3],"total":25,"page":1,"limit":9}"#).unwrap();
        assert_eq!(paged.total(), 25);
        assert_eq!(paged.total_pages(9), 3);

        let bare: Paged<u32> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(bare.total(), 2);
        assert_eq!(bare.total_pages(9), 1);

        let empty: Paged<u32> = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.total_pages(9), 0);
    }

    #[test]
    fn test_upload_response_accepts_both_keys() {
        let a: UploadResponse = serde_json::from_str(r#"{"url":"u1"}"#).unwrap();
        let b: UploadResponse = serde_json::from_str(r#"{"imageUrl":"u2"}"#).unwrap();
        assert_eq!((a.url.as_str(), b.url.as_str()), ("u1", "u2"));
    }

    #[test]
    fn test_draft_payload() {
        let draft = ArticleDraft {
            title: "  Hi ".into(),
            category_id: "c1".into(),
            content: "<p>x</p>".into(),
            image_url: String::new(),
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload.title, "Hi");
        assert_eq!(payload.image_url, None);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["categoryId"], "c1");
        assert!(json["imageUrl"].is_null());
    }

    #[test]
    fn test_edit_draft_belongs_to_its_article() {
        let article = crate::domain::article::fixtures::article("a7", "Seven", "c2");
        let draft = ArticleDraft::from_article(&article);
        assert_eq!(draft.category_id, "c2");
        assert!(draft.belongs_to(Some("a7")));
        assert!(!draft.belongs_to(None));
        assert!(ArticleDraft::default().belongs_to(None));

        let json = serde_json::to_value(ArticleDraft::default()).unwrap();
        assert!(json.get("articleId").is_none());
    }

    #[test]
    fn test_login_response_role() {
        let r: LoginResponse = serde_json::from_str(r#"{"token":"t","role":"Admin"}"#).unwrap();
        assert_eq!(r.role, Role::Admin);
    }
}
