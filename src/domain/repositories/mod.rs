//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; PostgreSQL implementations live in
//! `crate::infrastructure::persistence`, and `mockall` mocks are generated for
//! unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Link storage with atomic visit counting
//! - [`FileAssetRepository`] - File descriptor storage with atomic download counting
//! - [`AliasRepository`] - Cross-kind alias reservations
//! - [`IdSequence`] - Shared identifier sequence
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod alias_repository;
pub mod file_asset_repository;
pub mod id_sequence;
pub mod link_repository;

pub use alias_repository::AliasRepository;
pub use file_asset_repository::FileAssetRepository;
pub use id_sequence::IdSequence;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use alias_repository::MockAliasRepository;
#[cfg(test)]
pub use file_asset_repository::MockFileAssetRepository;
#[cfg(test)]
pub use id_sequence::MockIdSequence;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
