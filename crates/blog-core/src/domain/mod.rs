//! Domain Layer
//!
//! Records owned by the remote API. The local copy is a read-through
//! snapshot; nothing here enforces referential integrity.

pub(crate) mod article;
mod category;
mod entity;

pub use article::{related_articles, Article, Author, CategoryRef};
pub use category::Category;
pub use entity::{find_by_id, DomainError, DomainResult, Entity};

use serde::{Deserialize, Serialize};

/// Account role issued by the auth endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    /// Parse the select-box value; anything unknown is rejected.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "Admin" => Some(Role::Admin),
            "User" => Some(Role::User),
            _ => None,
        }
    }
}
