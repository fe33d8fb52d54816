//! Service context - dependency container for services
//!
//! Holds the persistence gateway (as trait objects) and the JWT service.
//! Services never reach a database client directly, which lets the same
//! code run over PostgreSQL or the in-memory store.

use std::sync::Arc;

use blog_common::auth::JwtService;
use blog_core::traits::{PostRepository, ReactionStore, UserRepository};
use blog_db::{MemoryStore, PgPool, PgPostRepository, PgReactionStore, PgUserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Present only when backed by PostgreSQL; used for readiness probes
    pool: Option<PgPool>,

    // Persistence gateway
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    reaction_store: Arc<dyn ReactionStore>,

    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        reaction_store: Arc<dyn ReactionStore>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            post_repo,
            reaction_store,
            jwt_service,
        }
    }

    /// Wire every gateway trait to PostgreSQL
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self::new(
            Some(pool.clone()),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgPostRepository::new(pool.clone())),
            Arc::new(PgReactionStore::new(pool)),
            jwt_service,
        )
    }

    /// Wire every gateway trait to one shared in-memory store
    pub fn in_memory(store: MemoryStore, jwt_service: Arc<JwtService>) -> Self {
        Self::new(
            None,
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
            jwt_service,
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Run a trivial query against the pool
    ///
    /// Always succeeds for the in-memory gateway.
    pub async fn check_database(&self) -> ServiceResult<()> {
        let Some(pool) = &self.pool else {
            return Ok(());
        };
        sqlx::query("SELECT 1")
            .execute(pool)
            .await
            .map(|_| ())
            .map_err(|e| ServiceError::internal(format!("Database unavailable: {e}")))
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the reaction store
    pub fn reaction_store(&self) -> &dyn ReactionStore {
        self.reaction_store.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    reaction_store: Option<Arc<dyn ReactionStore>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn reaction_store(mut self, store: Arc<dyn ReactionStore>) -> Self {
        self.reaction_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::internal(format!("{name} is required"));

        Ok(ServiceContext::new(
            self.pool,
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
            self.post_repo.ok_or_else(|| missing("post_repo"))?,
            self.reaction_store.ok_or_else(|| missing("reaction_store"))?,
            self.jwt_service.ok_or_else(|| missing("jwt_service"))?,
        ))
    }
}
