//! REST Collaborator - Core Trait
//!
//! Every mutating call takes the session explicitly. Futures are not
//! `Send` because the browser fetch backend is single-threaded.

use async_trait::async_trait;

use super::dto::{
    ArticlePayload, ArticleQuery, CategoryPayload, ImageUpload, LoginRequest, LoginResponse,
    Paged, RegisterRequest, UploadResponse,
};
use super::error::ApiResult;
use crate::domain::{Article, Category};
use crate::session::Session;

#[async_trait(?Send)]
pub trait BlogApi {
    // Categories
    async fn list_categories(&self) -> ApiResult<Vec<Category>>;
    async fn create_category(&self, session: &Session, payload: &CategoryPayload) -> ApiResult<Category>;
    async fn update_category(&self, session: &Session, id: &str, payload: &CategoryPayload) -> ApiResult<Category>;
    async fn delete_category(&self, session: &Session, id: &str) -> ApiResult<()>;

    // Articles
    async fn list_articles(&self, query: &ArticleQuery) -> ApiResult<Paged<Article>>;
    async fn get_article(&self, id: &str) -> ApiResult<Article>;
    async fn create_article(&self, session: &Session, payload: &ArticlePayload) -> ApiResult<Article>;
    async fn update_article(&self, session: &Session, id: &str, payload: &ArticlePayload) -> ApiResult<Article>;
    async fn delete_article(&self, session: &Session, id: &str) -> ApiResult<()>;

    /// Upload an image; the bearer token is attached when a session exists
    async fn upload_image(&self, session: Option<&Session>, upload: ImageUpload) -> ApiResult<UploadResponse>;

    // Auth
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()>;
}
