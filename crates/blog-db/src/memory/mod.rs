//! In-memory persistence gateway
//!
//! Implements every persistence trait over plain collections behind one mutex.
//! It enforces the same unique keys as the PostgreSQL schema (email, slug,
//! one record per (post, user) and kind) and the same cascade on post
//! deletion, so services and HTTP handlers can be exercised without a database.

mod unit_of_work;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use blog_core::entities::{AuthoredPost, Post, ReactionCounts, ReactionKind, User};
use blog_core::error::DomainError;
use blog_core::traits::{
    PostRepository, ReactionStore, ReactionUnitOfWork, RepoResult, UserRepository,
};
use blog_core::value_objects::{PostId, UserId};

pub use unit_of_work::MemoryUnitOfWork;

type ReactionKey = (PostId, UserId, ReactionKind);

#[derive(Debug, Default)]
struct MemoryState {
    users: HashMap<UserId, User>,
    credentials: HashMap<UserId, String>,
    posts: HashMap<PostId, Post>,
    /// Existence is the state; the value orders per-user listings
    reactions: HashMap<ReactionKey, DateTime<Utc>>,
}

impl MemoryState {
    fn has_reaction(&self, post_id: PostId, user_id: UserId, kind: ReactionKind) -> bool {
        self.reactions.contains_key(&(post_id, user_id, kind))
    }

    fn post_counts(&self, post_id: PostId) -> ReactionCounts {
        let mut counts = ReactionCounts::default();
        for (post, _, kind) in self.reactions.keys() {
            if *post == post_id {
                counts.set(*kind, counts.get(*kind) + 1);
            }
        }
        counts
    }

    fn authored(&self, post: &Post) -> Option<AuthoredPost> {
        self.users.get(&post.author_id).map(|author| AuthoredPost {
            post: post.clone(),
            author: author.as_author(),
        })
    }
}

/// Shared in-memory store; clones see the same data
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a reaction record exists for the pair
    pub fn reaction_exists(&self, post_id: PostId, user_id: UserId, kind: ReactionKind) -> bool {
        self.state.lock().has_reaction(post_id, user_id, kind)
    }

    /// Total number of reaction records of any kind held by the pair
    pub fn reactions_for_pair(&self, post_id: PostId, user_id: UserId) -> usize {
        ReactionKind::ALL
            .into_iter()
            .filter(|kind| self.reaction_exists(post_id, user_id, *kind))
            .count()
    }

    /// Number of reaction records across every post and user
    pub fn reactions_count(&self) -> usize {
        self.state.lock().reactions.len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.state.lock().users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.state.lock().users.values().any(|u| u.email == email))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.users.values().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        state.users.insert(user.id, user.clone());
        state.credentials.insert(user.id, password_hash.to_string());
        Ok(())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state
            .users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(DomainError::EmailAlreadyExists);
        }
        let stored = state
            .users
            .get_mut(&user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        *stored = User {
            updated_at: Utc::now(),
            ..user.clone()
        };
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self.state.lock().credentials.get(&id).cloned())
    }

    async fn update_password(&self, id: UserId, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        let stored = state
            .credentials
            .get_mut(&id)
            .ok_or(DomainError::UserNotFound(id))?;
        *stored = password_hash.to_string();
        Ok(())
    }

    async fn reaction_totals(&self, id: UserId) -> RepoResult<ReactionCounts> {
        let state = self.state.lock();
        let mut counts = ReactionCounts::default();
        for (_, user, kind) in state.reactions.keys() {
            if *user == id {
                counts.set(*kind, counts.get(*kind) + 1);
            }
        }
        Ok(counts)
    }

    async fn reacted_posts(&self, id: UserId, kind: ReactionKind) -> RepoResult<Vec<AuthoredPost>> {
        let state = self.state.lock();
        let mut hits: Vec<(DateTime<Utc>, AuthoredPost)> = state
            .reactions
            .iter()
            .filter(|((_, user, k), _)| *user == id && *k == kind)
            .filter_map(|((post_id, _, _), at)| {
                let post = state.posts.get(post_id)?;
                state.authored(post).map(|authored| (*at, authored))
            })
            .collect();
        hits.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(hits.into_iter().map(|(_, post)| post).collect())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.state.lock().posts.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Post>> {
        Ok(self
            .state
            .lock()
            .posts
            .values()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn find_by_author(&self, author_id: UserId) -> RepoResult<Vec<Post>> {
        let state = self.state.lock();
        let mut posts: Vec<Post> = state
            .posts
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.posts.values().any(|p| p.slug == post.slug) {
            return Err(DomainError::SlugAlreadyExists);
        }
        if !state.users.contains_key(&post.author_id) {
            return Err(DomainError::UserNotFound(post.author_id));
        }
        state.posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state
            .posts
            .values()
            .any(|p| p.id != post.id && p.slug == post.slug)
        {
            return Err(DomainError::SlugAlreadyExists);
        }
        let stored = state
            .posts
            .get_mut(&post.id)
            .ok_or(DomainError::PostNotFound(post.id))?;
        *stored = Post {
            updated_at: Utc::now(),
            ..post.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: PostId) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.posts.remove(&id).is_none() {
            return Err(DomainError::PostNotFound(id));
        }
        state.reactions.retain(|(post_id, _, _), _| *post_id != id);
        Ok(())
    }

    async fn counts(&self, id: PostId) -> RepoResult<ReactionCounts> {
        Ok(self.state.lock().post_counts(id))
    }
}

#[async_trait]
impl ReactionStore for MemoryStore {
    async fn begin(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> RepoResult<Box<dyn ReactionUnitOfWork>> {
        Ok(Box::new(MemoryUnitOfWork::begin(
            Arc::clone(&self.state),
            post_id,
            user_id,
        )))
    }
}
