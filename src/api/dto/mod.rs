//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod files;
pub mod health;
pub mod links;
pub mod pagination;
pub mod resolve;

/// Maps an optional alias field from a request body to the service input.
///
/// An empty or blank alias means "no alias", matching how the upload form
/// submits an untouched alias field.
pub fn requested_alias(alias: Option<String>) -> Option<String> {
    alias.filter(|a| !a.trim().is_empty())
}
