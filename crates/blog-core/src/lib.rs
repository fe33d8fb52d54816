//! # blog-core
//!
//! Domain layer containing entities, value objects, persistence traits and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Author, AuthoredPost, Post, Reaction, ReactionCounts, ReactionKind, User};
pub use error::DomainError;
pub use traits::{
    PostRepository, ReactionStore, ReactionUnitOfWork, RepoResult, UserRepository,
};
pub use value_objects::{slugify, IdParseError, PostId, UserId};
