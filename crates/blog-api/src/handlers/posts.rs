//! Post handlers
//!
//! Authoring and reading posts.

use axum::extract::State;
use blog_service::dto::{
    CreatePostRequest, PostResponse, PostWithCountsResponse, UpdatePostRequest,
};
use blog_service::PostService;

use crate::extractors::{AuthUser, OptionalAuthUser, PostIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, Envelope};
use crate::state::AppState;

/// Create a post (as a draft)
///
/// POST /api/post
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Envelope<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.create(auth.user_id, request).await?;
    Ok(Created(Envelope::ok("Post created successfully", post)))
}

/// Read a post; drafts only for their author
///
/// GET /api/post/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Envelope<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.get(post_id, auth.user_id()).await?;
    Ok(Envelope::ok("Post fetched successfully", post))
}

/// Update a post
///
/// PATCH /api/post/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Envelope<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.update(auth.user_id, post_id, request).await?;
    Ok(Envelope::ok("Post updated successfully", post))
}

/// Delete a post
///
/// DELETE /api/post/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Envelope<()>> {
    let service = PostService::new(state.service_context());
    service.delete(auth.user_id, post_id).await?;
    Ok(Envelope::ok("Post deleted successfully", ()))
}

/// The caller's posts with reaction counts
///
/// GET /api/posts/user
pub async fn get_my_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Envelope<Vec<PostWithCountsResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_mine(auth.user_id).await?;
    Ok(Envelope::ok("Posts fetched successfully", posts))
}
