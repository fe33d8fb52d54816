//! Reaction toggle engine
//!
//! Like, dislike and save are toggles: calling one flips whether the caller
//! holds that reaction on a post. Like and dislike exclude each other; save is
//! independent of both.
//!
//! Every toggle runs inside a single [`ReactionUnitOfWork`] scoped to the
//! (post, user) pair, so the read, the mutation and the recount all see the
//! same state. A unit of work that loses a race against another toggle for the
//! same pair is rejected by the store and surfaces here as `Conflict`.
//!
//! [`ReactionUnitOfWork`]: blog_core::traits::ReactionUnitOfWork

use blog_core::traits::ReactionUnitOfWork;
use blog_core::{DomainError, PostId, ReactionKind, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{ReactionAction, ReactionOutcome};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn toggle_like(
        &self,
        post_id: PostId,
        user_id: Option<UserId>,
    ) -> ServiceResult<ReactionOutcome> {
        self.toggle_reaction(post_id, user_id, ReactionKind::Like).await
    }

    pub async fn toggle_dislike(
        &self,
        post_id: PostId,
        user_id: Option<UserId>,
    ) -> ServiceResult<ReactionOutcome> {
        self.toggle_reaction(post_id, user_id, ReactionKind::Dislike).await
    }

    pub async fn toggle_save(
        &self,
        post_id: PostId,
        user_id: Option<UserId>,
    ) -> ServiceResult<ReactionOutcome> {
        self.toggle_reaction(post_id, user_id, ReactionKind::Save).await
    }

    /// Flip the caller's `kind` reaction on a post
    ///
    /// Checks, in order: the post exists (`NotFound`), the caller is identified
    /// (`Unauthorized`), the post is published (`Forbidden`). Nothing is written
    /// when any of them fails.
    #[instrument(skip(self))]
    pub async fn toggle_reaction(
        &self,
        post_id: PostId,
        user_id: Option<UserId>,
        kind: ReactionKind,
    ) -> ServiceResult<ReactionOutcome> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let user_id = match user_id {
            Some(id) if !id.is_nil() => id,
            _ => return Err(ServiceError::unauthorized("Sign in to react to posts")),
        };

        if !post.published {
            return Err(ServiceError::forbidden("Cannot react to an unpublished post"));
        }

        let outcome = self
            .run_toggle(post_id, user_id, kind)
            .await
            .map_err(|e| classify(e, kind))?;

        info!(
            post_id = %post_id,
            kind = %kind,
            action = ?outcome.action,
            "Reaction toggled"
        );

        Ok(outcome)
    }

    async fn run_toggle(
        &self,
        post_id: PostId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> Result<ReactionOutcome, DomainError> {
        let mut uow = self.ctx.reaction_store().begin(post_id, user_id).await?;

        let action = if uow.find(kind).await? {
            uow.delete(kind).await?;
            ReactionAction::Removed
        } else {
            if let Some(opposite) = kind.opposite() {
                if uow.find(opposite).await? {
                    uow.delete(opposite).await?;
                }
            }
            uow.create(kind).await?;
            ReactionAction::Added
        };

        let outcome = recount(uow.as_mut(), kind, action).await?;
        uow.commit().await?;

        Ok(outcome)
    }
}

async fn recount(
    uow: &mut dyn ReactionUnitOfWork,
    kind: ReactionKind,
    action: ReactionAction,
) -> Result<ReactionOutcome, DomainError> {
    match kind {
        ReactionKind::Like | ReactionKind::Dislike => {
            let likes = uow.count(ReactionKind::Like).await?;
            let dislikes = uow.count(ReactionKind::Dislike).await?;
            Ok(ReactionOutcome::votes(action, likes, dislikes))
        }
        ReactionKind::Save => {
            let saves = uow.count(ReactionKind::Save).await?;
            Ok(ReactionOutcome::saves(action, saves))
        }
    }
}

/// Lost races become `Conflict`; everything else passes through untouched
fn classify(err: DomainError, kind: ReactionKind) -> ServiceError {
    if err.is_conflict() {
        warn!(kind = %kind, error = %err, "Concurrent reaction toggle rejected");
        ServiceError::conflict(format!("The {kind} reaction was changed concurrently, try again"))
    } else if let DomainError::PostNotFound(id) = err {
        ServiceError::not_found("Post", id.to_string())
    } else {
        err.into()
    }
}
