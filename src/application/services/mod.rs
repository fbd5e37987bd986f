//! Business logic services for the application layer.

pub mod alias_registry;
pub mod auth_service;
pub mod identifier_allocator;
pub mod resolution_service;
pub mod resource_service;

pub use alias_registry::{AliasRegistry, validate_alias};
pub use auth_service::AuthService;
pub use identifier_allocator::IdentifierAllocator;
pub use resolution_service::ResolutionService;
pub use resource_service::{NewFileAssetInput, Page, ResourceService};
