//! reqwest implementation of [`BlogApi`]
//!
//! Runs on the browser fetch backend in the front-end and on the native
//! backend in host tools. No retries; failures surface as [`ApiError`].

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::dto::{
    ArticlePayload, ArticleQuery, CategoryPayload, ImageUpload, LoginRequest, LoginResponse,
    Paged, RegisterRequest, UploadResponse,
};
use super::error::{ApiError, ApiResult};
use super::traits::BlogApi;
use crate::config::AppConfig;
use crate::domain::{Article, Category};
use crate::session::Session;

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct HttpBlogApi {
    client: Client,
    base_url: String,
    authenticate_article_delete: bool,
}

impl HttpBlogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            authenticate_article_delete: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut api = Self::new(config.api_base_url.clone());
        api.authenticate_article_delete = config.authenticate_article_delete;
        api
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{collection}` or `{base}/{collection}/{id}` with the id encoded
    pub fn url(&self, collection: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => format!(
                "{}/{}/{}",
                self.base_url,
                collection,
                utf8_percent_encode(id, PATH_SEGMENT)
            ),
            None => format!("{}/{}", self.base_url, collection),
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, label: &str, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(label, request).await?;
        response.json::<T>().await.map_err(|e| {
            log::warn!("api decode failed call={} error={}", label, e);
            ApiError::Decode(e.to_string())
        })
    }

    async fn send_empty(&self, label: &str, request: RequestBuilder) -> ApiResult<()> {
        self.send(label, request).await.map(|_| ())
    }

    async fn send(&self, label: &str, request: RequestBuilder) -> ApiResult<reqwest::Response> {
        log::debug!("api call={}", label);
        let response = request.send().await.map_err(|e| {
            log::warn!("api transport failed call={} error={}", label, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            log::debug!("api ok call={} status={}", label, status.as_u16());
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        log::warn!("api failed call={} error={}", label, err);
        Err(err)
    }
}

#[async_trait(?Send)]
impl BlogApi for HttpBlogApi {
    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let request = self.client.get(self.url("categories", None));
        let paged: Paged<Category> = self.send_json("GET /categories", request).await?;
        Ok(paged.data)
    }

    async fn create_category(&self, session: &Session, payload: &CategoryPayload) -> ApiResult<Category> {
        let request = self
            .client
            .post(self.url("categories", None))
            .bearer_auth(&session.token)
            .json(payload);
        self.send_json("POST /categories", request).await
    }

    async fn update_category(&self, session: &Session, id: &str, payload: &CategoryPayload) -> ApiResult<Category> {
        let request = self
            .client
            .put(self.url("categories", Some(id)))
            .bearer_auth(&session.token)
            .json(payload);
        self.send_json("PUT /categories/{id}", request).await
    }

    async fn delete_category(&self, session: &Session, id: &str) -> ApiResult<()> {
        let request = self
            .client
            .delete(self.url("categories", Some(id)))
            .bearer_auth(&session.token);
        self.send_empty("DELETE /categories/{id}", request).await
    }

    async fn list_articles(&self, query: &ArticleQuery) -> ApiResult<Paged<Article>> {
        let request = self.client.get(self.url("articles", None)).query(query);
        self.send_json("GET /articles", request).await
    }

    async fn get_article(&self, id: &str) -> ApiResult<Article> {
        let request = self.client.get(self.url("articles", Some(id)));
        self.send_json("GET /articles/{id}", request).await
    }

    async fn create_article(&self, session: &Session, payload: &ArticlePayload) -> ApiResult<Article> {
        let request = self
            .client
            .post(self.url("articles", None))
            .bearer_auth(&session.token)
            .json(payload);
        self.send_json("POST /articles", request).await
    }

    async fn update_article(&self, session: &Session, id: &str, payload: &ArticlePayload) -> ApiResult<Article> {
        let request = self
            .client
            .put(self.url("articles", Some(id)))
            .bearer_auth(&session.token)
            .json(payload);
        self.send_json("PUT /articles/{id}", request).await
    }

    async fn delete_article(&self, session: &Session, id: &str) -> ApiResult<()> {
        let mut request = self.client.delete(self.url("articles", Some(id)));
        // Article deletes go out without a bearer token unless configured otherwise.
        if self.authenticate_article_delete {
            request = request.bearer_auth(&session.token);
        }
        self.send_empty("DELETE /articles/{id}", request).await
    }

    async fn upload_image(&self, session: Option<&Session>, upload: ImageUpload) -> ApiResult<UploadResponse> {
        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let mut request = self.client.post(self.url("upload", None)).multipart(form);
        if let Some(session) = session {
            request = request.bearer_auth(&session.token);
        }
        self.send_json("POST /upload", request).await
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let builder = self.client.post(self.url("auth/login", None)).json(request);
        self.send_json("POST /auth/login", builder).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        let builder = self.client.post(self.url("auth/register", None)).json(request);
        self.send_empty("POST /auth/register", builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let api = HttpBlogApi::new("https://api.example/api/");
        assert_eq!(api.base_url(), "https://api.example/api");
        assert_eq!(api.url("categories", None), "https://api.example/api/categories");
        assert_eq!(
            api.url("articles", Some("a/b c")),
            "https://api.example/api/articles/a%2Fb%20c"
        );
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig {
            authenticate_article_delete: true,
            ..AppConfig::default()
        };
        let api = HttpBlogApi::from_config(&config);
        assert!(api.authenticate_article_delete);
        assert_eq!(api.base_url(), "https://test-fe.mysellerpintar.com/api");
    }
}
