//! API information

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Welcome message, version, environment and the endpoint map
///
/// GET /
pub async fn api_info(State(state): State<AppState>) -> Json<Value> {
    let app = &state.config().app;

    Json(json!({
        "message": format!("Welcome to {}", app.name),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": app.env.as_str(),
        "platform": std::env::consts::OS,
        "endpoints": {
            "auth": {
                "register": "POST /api/auth/register",
                "login": "POST /api/auth/login"
            },
            "user": {
                "profile": "GET /api/user",
                "update": "PATCH /api/user",
                "liked": "GET /api/user/posts/liked",
                "disliked": "GET /api/user/posts/disliked",
                "saved": "GET /api/user/posts/saved"
            },
            "post": {
                "create": "POST /api/post",
                "read": "GET /api/post/:post_id",
                "update": "PATCH /api/post/:post_id",
                "delete": "DELETE /api/post/:post_id",
                "like": "POST /api/post/:post_id/like",
                "dislike": "POST /api/post/:post_id/dislike",
                "save": "POST /api/post/:post_id/save",
                "mine": "GET /api/posts/user"
            },
            "health": "GET /health"
        },
        "documentation": app.docs_url,
    }))
}
