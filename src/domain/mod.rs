//! Domain layer: entities and repository contracts.
//!
//! - [`entities`] - Links, file assets, aliases and identifier classification
//! - [`repositories`] - Storage traits implemented by the infrastructure layer
//!
//! The domain layer has no dependency on infrastructure or HTTP code.

pub mod entities;
pub mod repositories;
