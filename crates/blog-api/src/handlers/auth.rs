//! Authentication handlers
//!
//! Endpoints for user registration and login.

use axum::extract::State;
use blog_service::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use blog_service::AuthService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, Envelope};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Envelope<UserResponse>>> {
    let service = AuthService::new(state.service_context());
    let user = service.register(request).await?;
    Ok(Created(Envelope::ok("User created successfully", user)))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Envelope<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Envelope::ok("Login successful", response))
}
