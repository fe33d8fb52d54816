//! Reaction handlers
//!
//! Each endpoint toggles one reaction of the caller on a post.
//! Identity is optional at extraction so that an unknown post reports
//! 404 before a missing token reports 401.

use axum::extract::State;
use blog_service::dto::ReactionOutcome;
use blog_service::ReactionService;

use crate::extractors::{OptionalAuthUser, PostIdPath};
use crate::response::{ApiResult, Envelope};
use crate::state::AppState;

/// POST /api/post/{post_id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Envelope<ReactionOutcome>> {
    let service = ReactionService::new(state.service_context());
    let outcome = service.toggle_like(post_id, auth.user_id()).await?;
    Ok(Envelope::ok("Like toggled successfully", outcome))
}

/// POST /api/post/{post_id}/dislike
pub async fn toggle_dislike(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Envelope<ReactionOutcome>> {
    let service = ReactionService::new(state.service_context());
    let outcome = service.toggle_dislike(post_id, auth.user_id()).await?;
    Ok(Envelope::ok("Dislike toggled successfully", outcome))
}

/// POST /api/post/{post_id}/save
pub async fn toggle_save(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Envelope<ReactionOutcome>> {
    let service = ReactionService::new(state.service_context());
    let outcome = service.toggle_save(post_id, auth.user_id()).await?;
    Ok(Envelope::ok("Save toggled successfully", outcome))
}
