//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation, and the creation flow.
//! They consume repository traits and are shared by the HTTP handlers and the
//! admin CLI.
//!
//! # Available Services
//!
//! - [`services::identifier_allocator::IdentifierAllocator`] - Shared id sequence access
//! - [`services::alias_registry::AliasRegistry`] - Alias validation and cross-kind reservation
//! - [`services::resolution_service::ResolutionService`] - Identifier resolution with counting
//! - [`services::resource_service::ResourceService`] - Link and file asset creation and listing
//! - [`services::auth_service::AuthService`] - Management API passkey check

pub mod services;
