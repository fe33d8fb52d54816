//! Authentication service
//!
//! Handles user registration and login.

use blog_common::auth::{hash_password, validate_password_strength, verify_password};
use blog_common::AppError;
use blog_core::entities::User;
use blog_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        validate_password_strength(&request.password)?;

        let email = request.email.trim().to_string();
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(request.name.trim().to_string(), email);

        // The insert is the real uniqueness check; the lookup above only gives a friendlier path
        self.ctx
            .user_repo()
            .create(&user, &password_hash)
            .await
            .map_err(|e| match e {
                DomainError::EmailAlreadyExists => ServiceError::conflict("Email already registered"),
                other => other.into(),
            })?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(UserResponse::from(&user))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(request.email.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no credentials stored");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token = self.ctx.jwt_service().issue(user.id)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginResponse {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user: UserResponse::from(&user),
        })
    }
}
