//! User handlers
//!
//! The caller's profile and the posts they reacted to.

use axum::extract::State;
use blog_service::dto::{PostResponse, ProfileResponse, UpdateUserRequest, UserResponse};
use blog_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Envelope};
use crate::state::AppState;

/// Get current user with reaction totals
///
/// GET /api/user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Envelope<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let profile = service.profile(auth.user_id).await?;
    Ok(Envelope::ok("User profile fetched successfully", profile))
}

/// Update current user
///
/// PATCH /api/user
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Envelope<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.update_profile(auth.user_id, request).await?;
    Ok(Envelope::ok("User profile updated successfully", user))
}

/// GET /api/user/posts/liked
pub async fn get_liked_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Envelope<Vec<PostResponse>>> {
    let service = UserService::new(state.service_context());
    let posts = service.liked_posts(auth.user_id).await?;
    Ok(Envelope::ok("Liked posts fetched successfully", posts))
}

/// GET /api/user/posts/disliked
pub async fn get_disliked_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Envelope<Vec<PostResponse>>> {
    let service = UserService::new(state.service_context());
    let posts = service.disliked_posts(auth.user_id).await?;
    Ok(Envelope::ok("Disliked posts fetched successfully", posts))
}

/// GET /api/user/posts/saved
pub async fn get_saved_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Envelope<Vec<PostResponse>>> {
    let service = UserService::new(state.service_context());
    let posts = service.saved_posts(auth.user_id).await?;
    Ok(Envelope::ok("Saved posts fetched successfully", posts))
}
