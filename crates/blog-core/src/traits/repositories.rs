//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-memory).

use async_trait::async_trait;

use crate::entities::{AuthoredPost, Post, ReactionCounts, ReactionKind, User};
use crate::error::DomainError;
use crate::value_objects::{PostId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user together with its credentials, atomically
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update name / email of an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: UserId, password_hash: &str) -> RepoResult<()>;

    /// How many posts the user has liked, disliked and saved
    async fn reaction_totals(&self, id: UserId) -> RepoResult<ReactionCounts>;

    /// Posts the user reacted to with `kind`, newest reaction first
    async fn reacted_posts(&self, id: UserId, kind: ReactionKind)
        -> RepoResult<Vec<AuthoredPost>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// Find post by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Post>>;

    /// All posts written by an author, newest first
    async fn find_by_author(&self, author_id: UserId) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post and its reactions
    async fn delete(&self, id: PostId) -> RepoResult<()>;

    /// Reaction tallies for a post
    async fn counts(&self, id: PostId) -> RepoResult<ReactionCounts>;
}

// ============================================================================
// Reaction Store
// ============================================================================

/// Opens transactional units of work over the reaction relations
#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// Begin a unit of work scoped to one (post, user) pair
    async fn begin(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> RepoResult<Box<dyn ReactionUnitOfWork>>;
}

/// One transaction over the reaction records of a single (post, user) pair
///
/// Dropping the unit of work without calling [`commit`](Self::commit) discards
/// every write made through it.
#[async_trait]
pub trait ReactionUnitOfWork: Send {
    /// Whether the pair currently holds a record of `kind`
    async fn find(&mut self, kind: ReactionKind) -> RepoResult<bool>;

    /// Insert a record of `kind`. A duplicate yields `ReactionAlreadyExists`.
    async fn create(&mut self, kind: ReactionKind) -> RepoResult<()>;

    /// Delete the record of `kind`; returns whether one existed
    async fn delete(&mut self, kind: ReactionKind) -> RepoResult<bool>;

    /// Number of `kind` records on the post, as seen inside this unit of work
    async fn count(&mut self, kind: ReactionKind) -> RepoResult<i64>;

    /// Make every write visible
    async fn commit(self: Box<Self>) -> RepoResult<()>;
}
