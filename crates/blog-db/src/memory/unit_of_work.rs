//! Optimistic unit of work for the in-memory store
//!
//! The pair's records and the post's counters are snapshotted at `begin`;
//! writes are staged locally. `commit` takes the lock once and refuses to
//! apply when a staged insert collides with an existing record or when a
//! record this unit of work looked at changed underneath it. Only the pair
//! is tracked, so different users reacting to one post never collide.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::debug;

use blog_core::entities::{ReactionCounts, ReactionKind};
use blog_core::error::DomainError;
use blog_core::traits::{ReactionUnitOfWork, RepoResult};
use blog_core::value_objects::{PostId, UserId};

use super::MemoryState;

pub struct MemoryUnitOfWork {
    state: Arc<Mutex<MemoryState>>,
    post_id: PostId,
    user_id: UserId,
    /// Presence of each kind for the pair when the unit of work began
    snapshot: HashMap<ReactionKind, bool>,
    counts: ReactionCounts,
    /// Kinds whose presence influenced a decision
    reads: HashSet<ReactionKind>,
    /// Desired final presence per kind
    staged: HashMap<ReactionKind, bool>,
}

impl MemoryUnitOfWork {
    pub(super) fn begin(state: Arc<Mutex<MemoryState>>, post_id: PostId, user_id: UserId) -> Self {
        let (snapshot, counts) = {
            let guard = state.lock();
            let snapshot = ReactionKind::ALL
                .into_iter()
                .map(|kind| (kind, guard.has_reaction(post_id, user_id, kind)))
                .collect();
            (snapshot, guard.post_counts(post_id))
        };

        Self {
            state,
            post_id,
            user_id,
            snapshot,
            counts,
            reads: HashSet::new(),
            staged: HashMap::new(),
        }
    }

    fn original(&self, kind: ReactionKind) -> bool {
        self.snapshot.get(&kind).copied().unwrap_or(false)
    }

    fn current(&self, kind: ReactionKind) -> bool {
        self.staged
            .get(&kind)
            .copied()
            .unwrap_or_else(|| self.original(kind))
    }
}

#[async_trait]
impl ReactionUnitOfWork for MemoryUnitOfWork {
    async fn find(&mut self, kind: ReactionKind) -> RepoResult<bool> {
        self.reads.insert(kind);
        Ok(self.current(kind))
    }

    async fn create(&mut self, kind: ReactionKind) -> RepoResult<()> {
        if self.current(kind) {
            return Err(DomainError::ReactionAlreadyExists(kind));
        }
        self.staged.insert(kind, true);
        Ok(())
    }

    async fn delete(&mut self, kind: ReactionKind) -> RepoResult<bool> {
        self.reads.insert(kind);
        let existed = self.current(kind);
        if existed {
            self.staged.insert(kind, false);
        }
        Ok(existed)
    }

    async fn count(&mut self, kind: ReactionKind) -> RepoResult<i64> {
        let base = self.counts.get(kind);
        let delta = match (self.original(kind), self.current(kind)) {
            (false, true) => 1,
            (true, false) => -1,
            _ => 0,
        };
        Ok(base + delta)
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let mut state = self.state.lock();

        if !state.posts.contains_key(&self.post_id) {
            return Err(DomainError::PostNotFound(self.post_id));
        }

        for (&kind, &present) in &self.staged {
            if present
                && !self.original(kind)
                && state.has_reaction(self.post_id, self.user_id, kind)
            {
                return Err(DomainError::ReactionAlreadyExists(kind));
            }
        }

        for &kind in &self.reads {
            if state.has_reaction(self.post_id, self.user_id, kind) != self.original(kind) {
                return Err(DomainError::SerializationFailure);
            }
        }

        let now = Utc::now();
        for (&kind, &present) in &self.staged {
            let key = (self.post_id, self.user_id, kind);
            if present {
                state.reactions.entry(key).or_insert(now);
            } else {
                state.reactions.remove(&key);
            }
        }

        debug!(
            post_id = %self.post_id,
            user_id = %self.user_id,
            writes = self.staged.len(),
            "In-memory reaction unit of work committed"
        );
        Ok(())
    }
}
