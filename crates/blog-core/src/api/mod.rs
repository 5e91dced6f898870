//! REST Collaborator
//!
//! The remote API owns persistence, authentication and validation. This
//! layer only describes its endpoints and forwards calls.

mod dto;
mod error;
mod http;
mod traits;

pub use dto::{
    ArticleDraft, ArticlePayload, ArticleQuery, CategoryPayload, ImageUpload, LoginRequest,
    LoginResponse, Paged, RegisterRequest, SortOrder, UploadResponse,
};
pub use error::{ApiError, ApiResult};
pub use http::HttpBlogApi;
pub use traits::BlogApi;
