//! PostgreSQL reaction store
//!
//! Each unit of work is one READ COMMITTED transaction over the reaction
//! relations of a single (post, user) pair. `begin` takes a transaction-scoped
//! advisory lock keyed on the pair, so toggles of the same pair run one after
//! another while different users on the same post never wait on each other.
//! The primary keys stay as the last guard against a duplicate record.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use blog_core::entities::ReactionKind;
use blog_core::error::DomainError;
use blog_core::traits::{ReactionStore, ReactionUnitOfWork, RepoResult};
use blog_core::value_objects::{PostId, UserId};

use crate::mappers::reaction_table;

use super::error::{is_foreign_key_violation, map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionStore
#[derive(Clone)]
pub struct PgReactionStore {
    pool: PgPool,
}

impl PgReactionStore {
    /// Create a new PgReactionStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionStore for PgReactionStore {
    #[instrument(skip(self))]
    async fn begin(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> RepoResult<Box<dyn ReactionUnitOfWork>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Released on commit or rollback
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(pair_lock_key(post_id, user_id))
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        Ok(Box::new(PgReactionUnitOfWork {
            tx,
            post_id,
            user_id,
        }))
    }
}

fn pair_lock_key(post_id: PostId, user_id: UserId) -> String {
    format!("reaction:{post_id}:{user_id}")
}

/// Open transaction scoped to one (post, user) pair
///
/// Dropping it without `commit` rolls the transaction back.
pub struct PgReactionUnitOfWork {
    tx: Transaction<'static, Postgres>,
    post_id: PostId,
    user_id: UserId,
}

#[async_trait]
impl ReactionUnitOfWork for PgReactionUnitOfWork {
    async fn find(&mut self, kind: ReactionKind) -> RepoResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE post_id = $1 AND user_id = $2)",
            reaction_table(kind)
        );

        sqlx::query_scalar::<_, bool>(&sql)
            .bind(self.post_id.into_inner())
            .bind(self.user_id.into_inner())
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_db_error)
    }

    async fn create(&mut self, kind: ReactionKind) -> RepoResult<()> {
        let sql = format!(
            "INSERT INTO {} (post_id, user_id) VALUES ($1, $2)",
            reaction_table(kind)
        );

        sqlx::query(&sql)
            .bind(self.post_id.into_inner())
            .bind(self.user_id.into_inner())
            .execute(&mut *self.tx)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    // Post deleted since the precondition read
                    return DomainError::PostNotFound(self.post_id);
                }
                map_unique_violation(e, || DomainError::ReactionAlreadyExists(kind))
            })?;

        debug!(post_id = %self.post_id, user_id = %self.user_id, %kind, "Reaction row inserted");
        Ok(())
    }

    async fn delete(&mut self, kind: ReactionKind) -> RepoResult<bool> {
        let sql = format!(
            "DELETE FROM {} WHERE post_id = $1 AND user_id = $2",
            reaction_table(kind)
        );

        let result = sqlx::query(&sql)
            .bind(self.post_id.into_inner())
            .bind(self.user_id.into_inner())
            .execute(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&mut self, kind: ReactionKind) -> RepoResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE post_id = $1", reaction_table(kind));

        sqlx::query_scalar::<_, i64>(&sql)
            .bind(self.post_id.into_inner())
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_db_error)
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_db_error)
    }
}
