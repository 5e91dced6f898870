//! List flow integration tests
//!
//! Drives the list view model and session against an in-memory `BlogApi`.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use blog_core::api::{
    ApiError, ApiResult, ArticlePayload, ArticleQuery, BlogApi, CategoryPayload, ImageUpload,
    LoginRequest, LoginResponse, Paged, RegisterRequest, UploadResponse,
};
use blog_core::{
    paginate, Article, Category, CategoryRef, FilterCriteria, ListView, RemovalOutcome, Role,
    Session, SessionContext,
};
use chrono::{Duration, TimeZone, Utc};

#[derive(Default)]
struct FakeApi {
    categories: RefCell<Vec<Category>>,
    articles: RefCell<Vec<Article>>,
    fail_deletes: Cell<bool>,
    next_id: Cell<u32>,
}

impl FakeApi {
    fn seeded(categories: usize, articles: usize) -> Self {
        let api = FakeApi::default();
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        *api.categories.borrow_mut() = (1..=categories)
            .map(|i| Category::new(format!("c{}", i), format!("Category {}", i)))
            .collect();
        *api.articles.borrow_mut() = (1..=articles)
            .map(|i| {
                let category = format!("c{}", (i - 1) % categories.max(1) + 1);
                Article {
                    id: format!("a{}", i),
                    title: format!("Article {}", i),
                    content: format!("<p>Body {}</p>", i),
                    created_at: base + Duration::hours(i as i64),
                    category_id: Some(category.clone()),
                    category: Some(CategoryRef {
                        id: category.clone(),
                        name: category,
                    }),
                    user: None,
                    image_url: None,
                }
            })
            .collect();
        api
    }

    fn fresh_id(&self, prefix: &str) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("{}-new{}", prefix, id)
    }

    fn admin() -> Session {
        Session {
            token: "token-admin".into(),
            username: "admin".into(),
            role: Role::Admin,
        }
    }
}

#[async_trait(?Send)]
impl BlogApi for FakeApi {
    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }

    async fn create_category(&self, _session: &Session, payload: &CategoryPayload) -> ApiResult<Category> {
        let category = Category::new(self.fresh_id("c"), payload.name.clone());
        self.categories.borrow_mut().push(category.clone());
        Ok(category)
    }

    async fn update_category(&self, _session: &Session, id: &str, payload: &CategoryPayload) -> ApiResult<Category> {
        let mut categories = self.categories.borrow_mut();
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ApiError::Status { status: 404, message: Some("Category not found".into()) })?;
        category.name = payload.name.clone();
        Ok(category.clone())
    }

    async fn delete_category(&self, _session: &Session, id: &str) -> ApiResult<()> {
        if self.fail_deletes.get() {
            return Err(ApiError::Transport("connection reset".into()));
        }
        self.categories.borrow_mut().retain(|c| c.id != id);
        Ok(())
    }

    async fn list_articles(&self, query: &ArticleQuery) -> ApiResult<Paged<Article>> {
        let mut matching: Vec<Article> = self
            .articles
            .borrow()
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&query.title.to_lowercase()))
            .filter(|a| query.category.is_empty() || a.category_id() == Some(query.category.as_str()))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len();
        let pagination = paginate(total, query.limit, query.page)
            .map_err(|e| ApiError::Status { status: 400, message: Some(e.to_string()) })?;
        Ok(Paged {
            data: matching[pagination.range].to_vec(),
            total: Some(total),
            page: Some(query.page),
            limit: Some(query.limit),
            total_pages: Some(pagination.page_count),
        })
    }

    async fn get_article(&self, id: &str) -> ApiResult<Article> {
        self.articles
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(ApiError::Status { status: 404, message: Some("Article not found".into()) })
    }

    async fn create_article(&self, _session: &Session, payload: &ArticlePayload) -> ApiResult<Article> {
        let article = Article {
            id: self.fresh_id("a"),
            title: payload.title.clone(),
            content: payload.content.clone(),
            created_at: Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap(),
            category_id: Some(payload.category_id.clone()),
            category: None,
            user: None,
            image_url: payload.image_url.clone(),
        };
        self.articles.borrow_mut().push(article.clone());
        Ok(article)
    }

    async fn update_article(&self, _session: &Session, id: &str, payload: &ArticlePayload) -> ApiResult<Article> {
        let mut article = self.get_article(id).await?;
        article.title = payload.title.clone();
        article.content = payload.content.clone();
        let mut articles = self.articles.borrow_mut();
        if let Some(slot) = articles.iter_mut().find(|a| a.id == id) {
            *slot = article.clone();
        }
        Ok(article)
    }

    async fn delete_article(&self, _session: &Session, id: &str) -> ApiResult<()> {
        if self.fail_deletes.get() {
            return Err(ApiError::from_status(500, r#"{"message":"Database unavailable"}"#));
        }
        self.articles.borrow_mut().retain(|a| a.id != id);
        Ok(())
    }

    async fn upload_image(&self, _session: Option<&Session>, upload: ImageUpload) -> ApiResult<UploadResponse> {
        Ok(UploadResponse {
            url: format!("https://cdn.test/{}", upload.file_name),
        })
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        match (request.username.as_str(), request.password.as_str()) {
            ("admin", "password1") => Ok(LoginResponse {
                token: "token-admin".into(),
                role: Role::Admin,
            }),
            _ => Err(ApiError::from_status(401, r#"{"message":"Invalid credentials"}"#)),
        }
    }

    async fn register(&self, _request: &RegisterRequest) -> ApiResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_admin_category_list_flow() {
    let api = FakeApi::seeded(23, 0);
    let mut view: ListView<Category> = ListView::new(10).expect("page size");
    view.replace_items(api.list_categories().await.expect("list"));

    assert_eq!(view.page_count(), 3);
    view.go_to_page(3);
    assert_eq!(view.visible().len(), 3);

    // typing a search term jumps back to page 1
    view.set_query("category 2");
    assert_eq!(view.current_page(), 1);
    let names: Vec<_> = view.visible().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Category 2", "Category 20", "Category 21", "Category 22", "Category 23"]);
}

#[tokio::test]
async fn test_failed_delete_rolls_back_row() {
    let api = FakeApi::seeded(5, 0);
    let session = FakeApi::admin();
    let mut view: ListView<Category> = ListView::new(10).expect("page size");
    view.replace_items(api.list_categories().await.expect("list"));

    api.fail_deletes.set(true);
    let removal = view.remove_tentatively(&"c3".to_string()).expect("row exists");
    assert_eq!(view.total_len(), 4);

    let result = api.delete_category(&session, "c3").await;
    let outcome = view.settle_removal(removal, &result);
    assert!(matches!(outcome, RemovalOutcome::RolledBack { .. }));
    let ids: Vec<_> = view.items().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3", "c4", "c5"]);
}

#[tokio::test]
async fn test_successful_delete_commits_and_refetch_agrees() {
    let api = FakeApi::seeded(2, 12);
    let session = FakeApi::admin();
    let mut view: ListView<Article> = ListView::new(10).expect("page size");
    let fetched = api.list_articles(&ArticleQuery::newest(100)).await.expect("list");
    view.replace_items(fetched.data);
    view.go_to_page(2);

    let newest_on_page_two = view.visible()[0].id.clone();
    let removal = view.remove_tentatively(&newest_on_page_two).expect("row exists");
    let result = api.delete_article(&session, &newest_on_page_two).await;
    assert_eq!(view.settle_removal(removal, &result), RemovalOutcome::Committed);

    let refetched = api.list_articles(&ArticleQuery::newest(100)).await.expect("list");
    assert_eq!(refetched.total(), view.total_len());
    assert_eq!(view.current_page(), 2);
}

#[tokio::test]
async fn test_admin_article_filters_combine() {
    let api = FakeApi::seeded(3, 30);
    let mut view: ListView<Article> = ListView::new(10).expect("page size");
    view.replace_items(api.list_articles(&ArticleQuery::newest(100)).await.expect("list").data);

    view.set_criteria(FilterCriteria::new("article 1", Some("c1".into())));
    let titles: Vec<_> = view.visible().iter().map(|a| a.title.as_str()).collect();
    // c1 holds articles 1, 4, 7, ...; of those "Article 1", "Article 10", "Article 13", ...
    assert_eq!(titles, vec!["Article 19", "Article 16", "Article 13", "Article 10", "Article 1"]);
}

#[tokio::test]
async fn test_server_side_public_listing() {
    let api = FakeApi::seeded(2, 20);
    let first = api.list_articles(&ArticleQuery::newest(9)).await.expect("list");
    assert_eq!(first.data.len(), 9);
    assert_eq!(first.total_pages(9), 3);
    assert_eq!(first.data[0].id, "a20");

    let last = api.list_articles(&ArticleQuery::newest(9).at_page(3)).await.expect("list");
    assert_eq!(last.data.len(), 2);

    let beyond = api.list_articles(&ArticleQuery::newest(9).at_page(7)).await.expect("list");
    assert!(beyond.data.is_empty());

    let filtered = api
        .list_articles(&ArticleQuery::newest(9).with_category("c2").with_title("1"))
        .await
        .expect("list");
    // even-numbered articles containing "1": 10, 12, 14, 16, 18
    assert_eq!(filtered.total(), 5);
}

#[tokio::test]
async fn test_login_starts_session_and_errors_carry_message() {
    let api = FakeApi::default();
    let mut sessions = SessionContext::anonymous();

    let err = api
        .login(&LoginRequest {
            username: "admin".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    assert_eq!(sessions.require().unwrap_err(), ApiError::Unauthenticated);

    let response = api
        .login(&LoginRequest {
            username: "admin".into(),
            password: "password1".into(),
        })
        .await
        .expect("login");
    let session = sessions.begin("admin", response).clone();
    assert!(session.is_admin());

    let created = api
        .create_category(&session, &CategoryPayload { name: "Rust".into() })
        .await
        .expect("create");
    assert_eq!(api.list_categories().await.expect("list"), vec![created]);

    sessions.end();
    assert!(!sessions.is_authenticated());
}
