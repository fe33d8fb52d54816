//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (camelCase JSON)
//! - Mappers from domain entities to response DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreatePostRequest, LoginRequest, RegisterRequest, UpdatePostRequest, UpdateUserRequest,
};

pub use responses::{
    ApiResponse, AuthorResponse, HealthResponse, LoginResponse, PostResponse,
    PostWithCountsResponse, ProfileResponse, ReactionAction, ReactionOutcome, ReadinessResponse,
    UserResponse,
};
