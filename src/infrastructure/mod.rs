//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//!
//! Blob storage for uploaded bytes is external; this service only records the
//! location it is given.

pub mod persistence;
