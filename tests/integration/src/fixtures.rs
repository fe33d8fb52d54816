//! Test fixtures and data generators
//!
//! Provides reusable test data and multi-step setups for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::helpers::{assert_data, TestServer};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Reader {suffix}"),
            email: format!("reader{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub liked_posts: i64,
    pub disliked_posts: i64,
    pub saved_posts: i64,
}

#[derive(Debug, Deserialize)]
pub struct AuthorResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub published: bool,
    pub author: Option<AuthorResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCounts {
    pub id: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub save_count: i64,
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionOutcome {
    pub action: String,
    pub like_count: Option<i64>,
    pub dislike_count: Option<i64>,
    pub save_count: Option<i64>,
}

/// A registered, logged in user
#[derive(Debug)]
pub struct TestUser {
    pub id: String,
    pub token: String,
}

/// Register a fresh user and log them in
pub async fn signed_in_user(server: &TestServer) -> Result<TestUser> {
    let request = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &request).await?;
    let _: UserResponse = assert_data(response, StatusCode::CREATED).await?;

    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&request))
        .await?;
    let login: LoginResponse = assert_data(response, StatusCode::OK).await?;

    Ok(TestUser {
        id: login.user.id,
        token: login.access_token,
    })
}

/// Create a post as `author`, optionally publishing it
pub async fn create_post(server: &TestServer, author: &TestUser, published: bool) -> Result<PostResponse> {
    let body = json!({
        "title": format!("Story number {}", unique_suffix()),
        "tags": ["fiction"],
        "content": "It was a dark and stormy night."
    });
    let response = server.post_auth("/api/post", &author.token, &body).await?;
    let post: PostResponse = assert_data(response, StatusCode::CREATED).await?;

    if !published {
        return Ok(post);
    }

    let path = format!("/api/post/{}", post.id);
    let response = server
        .patch_auth(&path, &author.token, &json!({ "published": true }))
        .await?;
    assert_data(response, StatusCode::OK).await
}
