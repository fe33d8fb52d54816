//! API Integration Tests
//!
//! Each test spawns the full router over an in-memory store; no external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_data, assert_error, assert_json, create_post, fixtures::*, signed_in_user, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health / Info
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "status": "UP" }));
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["database"], "UP");
}

#[tokio::test]
async fn test_api_info() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Welcome to Story Time");
    assert_eq!(body["environment"], "development");
    assert_eq!(body["endpoints"]["auth"]["login"], "POST /api/auth/login");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/api/auth/login", &json!({ "email": "nobody@example.com", "password": "x" }))
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let user: UserResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(user.email, request.email);
    assert_eq!(user.name, request.name);

    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: LoginResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.token_type, "Bearer");
    assert_eq!(login.user.id, user.id);
    assert!(!login.access_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    server.post("/api/auth/register", &request).await.unwrap();
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_error(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_validation_is_unprocessable() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post(
            "/api/auth/register",
            &json!({ "name": "A", "email": "nope", "password": "short" }),
        )
        .await
        .unwrap();

    let body: Value = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["email"].is_array());
}

#[tokio::test]
async fn test_weak_password_rejected() {
    let server = TestServer::start().await.unwrap();
    let mut request = RegisterRequest::unique();
    request.password = "alllowercase".to_string();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_error(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();
    server.post("/api/auth/register", &request).await.unwrap();

    let login = LoginRequest {
        email: request.email,
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/api/auth/login", &login).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/user").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/api/user", "not-a-jwt").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

// ============================================================================
// Posts
// ============================================================================

#[tokio::test]
async fn test_create_and_read_post() {
    let server = TestServer::start().await.unwrap();
    let author = signed_in_user(&server).await.unwrap();
    let reader = signed_in_user(&server).await.unwrap();

    let draft = create_post(&server, &author, false).await.unwrap();
    assert!(!draft.published);
    assert_eq!(draft.author.as_ref().unwrap().id, author.id);

    let path = format!("/api/post/{}", draft.id);
    let response = server.get_auth(&path, &reader.token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth(&path, &author.token).await.unwrap();
    let fetched: PostResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.slug, draft.slug);

    let published = create_post(&server, &author, true).await.unwrap();
    let response = server.get(&format!("/api/post/{}", published.id)).await.unwrap();
    let fetched: PostResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(fetched.published);
}

#[tokio::test]
async fn test_duplicate_post_title() {
    let server = TestServer::start().await.unwrap();
    let author = signed_in_user(&server).await.unwrap();
    let body = json!({
        "title": "The Same Title",
        "tags": ["fiction"],
        "content": "It was a dark and stormy night."
    });

    let response = server.post_auth("/api/post", &author.token, &body).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = server.post_auth("/api/post", &author.token, &body).await.unwrap();
    let body: Value = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Post with title The Same Title already exists"));
}

#[tokio::test]
async fn test_create_post_validation() {
    let server = TestServer::start().await.unwrap();
    let author = signed_in_user(&server).await.unwrap();

    let body = json!({ "title": "Tiny", "tags": [], "content": "short" });
    let response = server.post_auth("/api/post", &author.token, &body).await.unwrap();
    let body: Value = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
    let details = &body["error"]["details"];
    assert!(details["title"].is_array());
    assert!(details["tags"].is_array());
    assert!(details["content"].is_array());
}

#[tokio::test]
async fn test_only_author_edits() {
    let server = TestServer::start().await.unwrap();
    let author = signed_in_user(&server).await.unwrap();
    let other = signed_in_user(&server).await.unwrap();
    let post = create_post(&server, &author, true).await.unwrap();
    let path = format!("/api/post/{}", post.id);

    let response = server
        .patch_auth(&path, &other.token, &json!({ "published": false }))
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &other.token).await.unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &author.token).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.get(&path).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_malformed_post_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/post/not-a-uuid").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_reaction_sequence() {
    let server = TestServer::start().await.unwrap();
    let author = signed_in_user(&server).await.unwrap();
    let reader = signed_in_user(&server).await.unwrap();
    let post = create_post(&server, &author, true).await.unwrap();

    let like = format!("/api/post/{}/like", post.id);
    let dislike = format!("/api/post/{}/dislike", post.id);

    let response = server.post_empty(&like, Some(&reader.token)).await.unwrap();
    let outcome: ReactionOutcome = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.action, "added");
    assert_eq!((outcome.like_count, outcome.dislike_count), (Some(1), Some(0)));
    assert_eq!(outcome.save_count, None);

    let response = server.post_empty(&dislike, Some(&reader.token)).await.unwrap();
    let outcome: ReactionOutcome = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.action, "added");
    assert_eq!((outcome.like_count, outcome.dislike_count), (Some(0), Some(1)));

    let response = server.post_empty(&dislike, Some(&reader.token)).await.unwrap();
    let outcome: ReactionOutcome = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.action, "removed");
    assert_eq!((outcome.like_count, outcome.dislike_count), (Some(0), Some(0)));
}

#[tokio::test]
async fn test_save_and_profile_listings() {
    let server = TestServer::start().await.unwrap();
    let author = signed_in_user(&server).await.unwrap();
    let reader = signed_in_user(&server).await.unwrap();
    let post = create_post(&server, &author, true).await.unwrap();

    let save = format!("/api/post/{}/save", post.id);
    let like = format!("/api/post/{}/like", post.id);

    let response = server.post_empty(&save, Some(&reader.token)).await.unwrap();
    let outcome: ReactionOutcome = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.save_count, Some(1));
    assert_eq!(outcome.like_count, None);

    server.post_empty(&like, Some(&reader.token)).await.unwrap();

    let response = server.get_auth("/api/user", &reader.token).await.unwrap();
    let profile: ProfileResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.id, reader.id);
    assert_eq!(
        (profile.liked_posts, profile.disliked_posts, profile.saved_posts),
        (1, 0, 1)
    );

    let response = server.get_auth("/api/user/posts/saved", &reader.token).await.unwrap();
    let saved: Vec<PostResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, post.id);
    assert_eq!(saved[0].author.as_ref().unwrap().id, author.id);

    let response = server.get_auth("/api/user/posts/disliked", &reader.token).await.unwrap();
    let disliked: Vec<PostResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(disliked.is_empty());

    let response = server.get_auth("/api/posts/user", &author.token).await.unwrap();
    let mine: Vec<PostWithCounts> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, post.id);
    assert_eq!((mine[0].like_count, mine[0].dislike_count, mine[0].save_count), (1, 0, 1));
}

#[tokio::test]
async fn test_reaction_preconditions() {
    let server = TestServer::start().await.unwrap();
    let author = signed_in_user(&server).await.unwrap();
    let draft = create_post(&server, &author, false).await.unwrap();
    let published = create_post(&server, &author, true).await.unwrap();

    // Unknown post wins over missing identity
    let missing = "/api/post/67e55044-10b1-426f-9247-bb680e5fe0c8/like";
    let response = server.post_empty(missing, None).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    let path = format!("/api/post/{}/like", published.id);
    let response = server.post_empty(&path, None).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let path = format!("/api/post/{}/save", draft.id);
    let response = server.post_empty(&path, Some(&author.token)).await.unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(server.store.reactions_count(), 0);
}

#[tokio::test]
async fn test_parallel_likes_never_duplicate() {
    let server = TestServer::start().await.unwrap();
    let author = signed_in_user(&server).await.unwrap();
    let reader = signed_in_user(&server).await.unwrap();
    let post = create_post(&server, &author, true).await.unwrap();
    let like = format!("/api/post/{}/like", post.id);

    let (first, second) = tokio::join!(
        server.post_empty(&like, Some(&reader.token)),
        server.post_empty(&like, Some(&reader.token)),
    );

    let mut actions = Vec::new();
    let mut conflicts = 0;
    for response in [first.unwrap(), second.unwrap()] {
        if response.status() == StatusCode::CONFLICT {
            assert_eq!(assert_error(response, StatusCode::CONFLICT).await.unwrap(), "CONFLICT");
            conflicts += 1;
        } else {
            let outcome: ReactionOutcome = assert_data(response, StatusCode::OK).await.unwrap();
            actions.push(outcome.action);
        }
    }
    actions.sort();

    // Either the race was lost outright or the requests ran back to back
    if conflicts == 1 {
        assert_eq!(actions, ["added"]);
        assert_eq!(server.store.reactions_count(), 1);
    } else {
        assert_eq!(actions, ["added", "removed"]);
        assert_eq!(server.store.reactions_count(), 0);
    }
}
