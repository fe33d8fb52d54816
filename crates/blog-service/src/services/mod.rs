//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a call.

pub mod auth;
pub mod context;
pub mod error;
pub mod post;
pub mod reaction;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use reaction::ReactionService;
pub use user::UserService;
