//! Category Entity
//!
//! Categories group articles; each article references exactly one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A category as returned by `GET /categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Creation timestamp (absent on some nested payloads)
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: None,
        }
    }
}

impl Entity for Category {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
