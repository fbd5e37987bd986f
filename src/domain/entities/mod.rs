//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Link`] - A short identifier redirecting to a target URL
//! - [`FileAsset`] - A short identifier for an uploaded file descriptor
//! - [`Alias`] - A validated user-chosen identifier
//! - [`Identifier`] - A classified incoming identifier (numeric id or alias)
//!
//! `NewLink` and `NewFileAsset` carry the data for inserting a record under an
//! id that was allocated beforehand.

pub mod alias;
pub mod file_asset;
pub mod identifier;
pub mod link;
pub mod resource;

pub use alias::Alias;
pub use file_asset::{DEFAULT_MIME_TYPE, FileAsset, NewFileAsset};
pub use identifier::Identifier;
pub use link::{Link, NewLink};
pub use resource::{Resolution, ResourceKind, ResourceRef};
