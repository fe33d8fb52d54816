//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header. The token's
//! subject must still be a registered user.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use blog_common::AppError;
use blog_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// User ID from the JWT token
    pub user_id: UserId,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

async fn resolve(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let claims = state.jwt_service().validate(token).map_err(|e| {
        tracing::warn!(error = %e, "Rejected access token");
        e
    })?;

    let user_id = claims.user_id()?;

    // Tokens outlive accounts; a deleted user must not keep acting
    let exists = state
        .service_context()
        .user_repo()
        .find_by_id(user_id)
        .await?
        .is_some();
    if !exists {
        tracing::warn!(user_id = %user_id, "Token subject no longer exists");
        return Err(AppError::InvalidToken.into());
    }

    Ok(AuthUser::new(user_id))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        resolve(&app_state, bearer.token()).await
    }
}

/// Optional authenticated user
///
/// None when the header is absent or the token is rejected (bad signature,
/// expired, subject gone). Lookup failures still propagate.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn user_id(&self) -> Option<UserId> {
        self.0.map(|auth| auth.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);
                match resolve(&app_state, bearer.token()).await {
                    Ok(auth) => Ok(OptionalAuthUser(Some(auth))),
                    Err(ApiError::App(e)) => {
                        tracing::debug!(error = %e, "Treating rejected token as anonymous");
                        Ok(OptionalAuthUser(None))
                    }
                    Err(e) => Err(e),
                }
            }
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}
