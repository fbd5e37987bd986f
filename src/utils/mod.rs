//! Utility functions shared across layers.
//!
//! - [`alias_rules`] - Alias syntax and policy checks
//! - [`url_normalizer`] - Redirect target validation and normalization
//! - [`db_error`] - PostgreSQL error classification

pub mod alias_rules;
pub mod db_error;
pub mod url_normalizer;
