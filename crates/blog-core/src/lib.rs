//! Blog Console Core
//!
//! Layered architecture:
//! - domain: entities owned by the remote API
//! - pagination / filter / debounce / listing: shaping fetched lists for display
//! - removal / session: explicit state transitions around API calls
//! - editor: structured rich-text document and command mapping
//! - api: REST collaborator trait and reqwest implementation
//! - config / route / validation / text: ambient helpers shared by the UI

pub mod api;
pub mod config;
pub mod debounce;
pub mod domain;
pub mod editor;
pub mod filter;
pub mod listing;
pub mod pagination;
pub mod removal;
pub mod route;
pub mod session;
pub mod text;
pub mod validation;

pub use config::{AppConfig, ConfigError};
pub use debounce::{Debouncer, Millis, Ticket};
pub use editor::{Command, Document, Editor, Selection};
pub use domain::{
    related_articles, Article, Author, Category, CategoryRef, DomainError, DomainResult, Entity,
    Role,
};
pub use filter::{filter_cloned, filter_items, FilterCriteria, Filterable};
pub use listing::ListView;
pub use pagination::{paginate, PageLabel, PageState, Pagination, PaginationError, Paginator};
pub use removal::{remove_tentatively, RemovalOutcome, TentativeRemoval};
pub use route::Route;
pub use session::{Session, SessionContext};
