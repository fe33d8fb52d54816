//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` and render camelCase JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;

use blog_core::{PostId, UserId};

// ============================================================================
// Common Response Types
// ============================================================================

/// Success envelope shared by every endpoint
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

// ============================================================================
// Auth / User Responses
// ============================================================================

/// Login response with an access token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Current user with reaction tallies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub liked_posts: i64,
    pub disliked_posts: i64,
    pub saved_posts: i64,
}

// ============================================================================
// Post Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub tags: Vec<String>,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCountsResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub like_count: i64,
    pub dislike_count: i64,
    pub save_count: i64,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// What a toggle did to the caller's record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionAction {
    Added,
    Removed,
}

/// Result of a reaction toggle
///
/// Like/Dislike toggles carry both vote counters; Save toggles carry the save counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionOutcome {
    pub action: ReactionAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dislike_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_count: Option<i64>,
}

impl ReactionOutcome {
    pub fn votes(action: ReactionAction, likes: i64, dislikes: i64) -> Self {
        Self {
            action,
            like_count: Some(likes),
            dislike_count: Some(dislikes),
            save_count: None,
        }
    }

    pub fn saves(action: ReactionAction, saves: i64) -> Self {
        Self {
            action,
            like_count: None,
            dislike_count: None,
            save_count: Some(saves),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self { status: "UP" }
    }
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}
