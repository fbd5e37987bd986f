//! HTTP middleware for request processing.
//!
//! Provides passkey authentication and request tracing.

pub mod auth;
pub mod tracing;
