//! Route definitions
//!
//! Application routes are mounted under /api; health and the root info
//! endpoint are exported separately so they bypass rate limiting.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, posts, reactions, root, users};
use crate::state::AppState;

/// Create the main API router (excluding health and root)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check and API info routes
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root::api_info))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(post_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Current user routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user",
            get(users::get_current_user).patch(users::update_current_user),
        )
        .route("/user/posts/liked", get(users::get_liked_posts))
        .route("/user/posts/disliked", get(users::get_disliked_posts))
        .route("/user/posts/saved", get(users::get_saved_posts))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/post", post(posts::create_post))
        .route(
            "/post/:post_id",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        // Reaction toggles
        .route("/post/:post_id/like", post(reactions::toggle_like))
        .route("/post/:post_id/dislike", post(reactions::toggle_dislike))
        .route("/post/:post_id/save", post(reactions::toggle_save))
        .route("/posts/user", get(posts::get_my_posts))
}
