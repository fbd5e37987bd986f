//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AliasRegistry, AuthService, IdentifierAllocator, ResolutionService, ResourceService,
};
use crate::infrastructure::persistence::{
    PgAliasRepository, PgFileAssetRepository, PgIdSequence, PgLinkRepository,
};

pub type PgResourceService =
    ResourceService<PgLinkRepository, PgFileAssetRepository, PgAliasRepository, PgIdSequence>;
pub type PgResolutionService = ResolutionService<PgLinkRepository, PgFileAssetRepository>;

/// Application state cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub resource_service: Arc<PgResourceService>,
    pub resolution_service: Arc<PgResolutionService>,
    pub auth_service: Arc<AuthService>,
    pub base_url: String,
}

impl AppState {
    /// Wires the PostgreSQL repositories into the services.
    ///
    /// `base_url` is the public origin short URLs are built from; a trailing
    /// `/` is ignored.
    pub fn new(
        pool: Arc<PgPool>,
        base_url: &str,
        admin_passkey: &str,
        max_file_size_bytes: i64,
    ) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
        let file_repository = Arc::new(PgFileAssetRepository::new(pool.clone()));
        let alias_repository = Arc::new(PgAliasRepository::new(pool.clone()));
        let id_sequence = Arc::new(PgIdSequence::new(pool.clone()));

        let resource_service = ResourceService::new(
            link_repository.clone(),
            file_repository.clone(),
            AliasRegistry::new(alias_repository),
            IdentifierAllocator::new(id_sequence),
        )
        .with_max_file_size(max_file_size_bytes);

        Self {
            db: pool,
            resource_service: Arc::new(resource_service),
            resolution_service: Arc::new(ResolutionService::new(link_repository, file_repository)),
            auth_service: Arc::new(AuthService::new(admin_passkey)),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Public URL for a resource key (alias or numeric id).
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }
}
