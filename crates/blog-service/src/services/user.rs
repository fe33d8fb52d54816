//! User service
//!
//! Profile lookup/update and the per-user reaction listings.

use blog_common::auth::{hash_password, validate_password_strength};
use blog_core::{DomainError, ReactionKind, UserId};
use tracing::{info, instrument};

use crate::dto::{PostResponse, ProfileResponse, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current user's profile with liked / disliked / saved totals
    #[instrument(skip(self))]
    pub async fn profile(&self, user_id: UserId) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let totals = self.ctx.user_repo().reaction_totals(user_id).await?;

        Ok(ProfileResponse::new(&user, totals))
    }

    /// Update name, email and/or password
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        if request.is_empty() {
            return Err(ServiceError::validation("Nothing to update"));
        }

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(password) = &request.password {
            validate_password_strength(password)?;
        }

        if let Some(name) = request.name {
            user.set_name(name.trim().to_string());
        }

        if let Some(email) = request.email {
            let email = email.trim().to_string();
            if email != user.email && self.ctx.user_repo().email_exists(&email).await? {
                return Err(ServiceError::conflict("Email already in use"));
            }
            user.set_email(email);
        }

        self.ctx.user_repo().update(&user).await.map_err(|e| match e {
            DomainError::EmailAlreadyExists => ServiceError::conflict("Email already in use"),
            other => other.into(),
        })?;

        if let Some(password) = request.password {
            let password_hash = hash_password(&password)?;
            self.ctx
                .user_repo()
                .update_password(user_id, &password_hash)
                .await?;
            info!(user_id = %user_id, "Password changed");
        }

        info!(user_id = %user_id, "User profile updated");

        Ok(UserResponse::from(&user))
    }

    /// Posts the user reacted to with `kind`, with their authors
    #[instrument(skip(self))]
    pub async fn reacted_posts(
        &self,
        user_id: UserId,
        kind: ReactionKind,
    ) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.user_repo().reacted_posts(user_id, kind).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn liked_posts(&self, user_id: UserId) -> ServiceResult<Vec<PostResponse>> {
        self.reacted_posts(user_id, ReactionKind::Like).await
    }

    pub async fn disliked_posts(&self, user_id: UserId) -> ServiceResult<Vec<PostResponse>> {
        self.reacted_posts(user_id, ReactionKind::Dislike).await
    }

    pub async fn saved_posts(&self, user_id: UserId) -> ServiceResult<Vec<PostResponse>> {
        self.reacted_posts(user_id, ReactionKind::Save).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{memory_context, seed_post, seed_user};
    use crate::services::ReactionService;

    #[tokio::test]
    async fn test_profile_counts_reactions() {
        let (ctx, store) = memory_context();
        let author = seed_user(&store, "Author").await;
        let reader = seed_user(&store, "Reader").await;
        let first = seed_post(&store, &author, "First published post", true).await;
        let second = seed_post(&store, &author, "Second published post", true).await;

        let reactions = ReactionService::new(&ctx);
        reactions.toggle_like(first.id, Some(reader.id)).await.unwrap();
        reactions.toggle_dislike(second.id, Some(reader.id)).await.unwrap();
        reactions.toggle_save(second.id, Some(reader.id)).await.unwrap();

        let profile = UserService::new(&ctx).profile(reader.id).await.unwrap();
        assert_eq!(profile.liked_posts, 1);
        assert_eq!(profile.disliked_posts, 1);
        assert_eq!(profile.saved_posts, 1);

        let saved = UserService::new(&ctx).saved_posts(reader.id).await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, second.id);
        assert_eq!(saved[0].author.as_ref().unwrap().name, "Author");
    }

    #[tokio::test]
    async fn test_profile_of_missing_user() {
        let (ctx, _) = memory_context();
        let err = UserService::new(&ctx).profile(UserId::new()).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_update_email_conflict() {
        let (ctx, store) = memory_context();
        let alice = seed_user(&store, "Alice").await;
        seed_user(&store, "Bob").await;

        let request = UpdateUserRequest {
            email: Some("bob@example.com".to_string()),
            ..Default::default()
        };
        let err = UserService::new(&ctx).update_profile(alice.id, request).await.unwrap_err();
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_update_name_and_password() {
        let (ctx, store) = memory_context();
        let alice = seed_user(&store, "Alice").await;

        let request = UpdateUserRequest {
            name: Some("Alice Liddell".to_string()),
            password: Some("N3w!Password".to_string()),
            ..Default::default()
        };
        let updated = UserService::new(&ctx).update_profile(alice.id, request).await.unwrap();
        assert_eq!(updated.name, "Alice Liddell");

        let hash = ctx.user_repo().get_password_hash(alice.id).await.unwrap().unwrap();
        assert!(blog_common::verify_password("N3w!Password", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_empty_update_rejected() {
        let (ctx, store) = memory_context();
        let alice = seed_user(&store, "Alice").await;

        let err = UserService::new(&ctx)
            .update_profile(alice.id, UpdateUserRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 422);
    }
}
