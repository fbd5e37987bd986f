//! Link entity: a short identifier that redirects to a target URL.

use chrono::{DateTime, Utc};

use super::alias::Alias;

/// A stored redirect with its usage counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub target_url: String,
    pub alias: Option<String>,
    pub created_at: DateTime<Utc>,
    pub visit_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        target_url: String,
        alias: Option<String>,
        created_at: DateTime<Utc>,
        visit_count: i64,
    ) -> Self {
        Self {
            id,
            target_url,
            alias,
            created_at,
            visit_count,
        }
    }

    /// The public path segment for this link: the alias if set, else the id.
    pub fn public_key(&self) -> String {
        self.alias.clone().unwrap_or_else(|| self.id.to_string())
    }
}

/// Input for persisting a new link under an already allocated id.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub id: i64,
    pub target_url: String,
    pub alias: Option<Alias>,
}
