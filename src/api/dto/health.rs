//! Health check response body.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Error,
}

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` when every check passed, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: Check,
    /// Reads the shared id sequence without advancing it.
    pub id_sequence: Check,
}

#[derive(Debug, Serialize)]
pub struct Check {
    pub status: CheckStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Check {
    pub fn ok(detail: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Ok,
            detail: Some(detail.into()),
        }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Error,
            detail: Some(detail.into()),
        }
    }
}

impl HealthChecks {
    pub fn all_ok(&self) -> bool {
        [&self.database, &self.id_sequence]
            .iter()
            .all(|p| p.status == CheckStatus::Ok)
    }
}
