//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Password complexity is checked by the auth service on top of the length rule.

use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters long"))]
    pub name: String,

    #[validate(email(message = "Email must be a valid email"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters long"))]
    pub name: Option<String>,

    #[validate(email(message = "Email must be a valid email"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 128, message = "Password must be at least 8 characters long"))]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 5, max = 100, message = "Title must be 5-100 characters long"))]
    pub title: String,

    #[validate(
        length(min = 1, max = 5, message = "A post needs between 1 and 5 tags"),
        custom(function = "validate_tags")
    )]
    pub tags: Vec<String>,

    #[validate(length(min = 10, message = "Content must be at least 10 characters long"))]
    pub content: String,
}

/// Update post request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 5, max = 100, message = "Title must be 5-100 characters long"))]
    pub title: Option<String>,

    #[validate(
        length(min = 1, max = 5, message = "A post needs between 1 and 5 tags"),
        custom(function = "validate_tags")
    )]
    pub tags: Option<Vec<String>>,

    #[validate(length(min = 10, message = "Content must be at least 10 characters long"))]
    pub content: Option<String>,

    pub published: Option<bool>,
}

const MAX_TAG_LEN: usize = 30;

fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || tag.chars().count() > MAX_TAG_LEN {
            let mut err = ValidationError::new("tag");
            err.message = Some("Each tag must be 1-30 characters long".into());
            return Err(err);
        }
    }
    Ok(())
}
