//! PostgreSQL repository implementations.
//!
//! Queries are built with SQLx and bound parameters; rows are decoded through
//! `FromRow` structs private to each repository.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Links with atomic visit counting
//! - [`PgFileAssetRepository`] - File descriptors with atomic download counting
//! - [`PgAliasRepository`] - Cross-kind alias registry
//! - [`PgIdSequence`] - Shared `resource_id_seq` sequence

pub mod pg_alias_repository;
pub mod pg_file_asset_repository;
pub mod pg_id_sequence;
pub mod pg_link_repository;

pub use pg_alias_repository::PgAliasRepository;
pub use pg_file_asset_repository::PgFileAssetRepository;
pub use pg_id_sequence::PgIdSequence;
pub use pg_link_repository::PgLinkRepository;
