//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::pagination::PaginationMeta;
use crate::domain::entities::Link;

/// Request to create a link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Redirect target (must be a valid HTTP/HTTPS URL).
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 2048))]
    pub url: String,

    /// Optional alias. Empty means none.
    pub alias: Option<String>,
}

/// A stored link as returned by the API.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub short_url: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub visit_count: i64,
}

impl LinkResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            alias: link.alias,
            short_url,
            target_url: link.target_url,
            created_at: link.created_at,
            visit_count: link.visit_count,
        }
    }
}

/// Paginated list of links.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<LinkResponse>,
}
