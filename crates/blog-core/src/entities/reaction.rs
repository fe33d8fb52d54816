//! Reaction entity - like, dislike or save marker on a post

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{PostId, UserId};

/// Kind of reaction a user can toggle on a post
///
/// Like and Dislike are mutually exclusive for a (post, user) pair; Save is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
    Save,
}

impl ReactionKind {
    pub const ALL: [Self; 3] = [Self::Like, Self::Dislike, Self::Save];

    /// The kind that must not coexist with this one
    pub const fn opposite(self) -> Option<Self> {
        match self {
            Self::Like => Some(Self::Dislike),
            Self::Dislike => Some(Self::Like),
            Self::Save => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::Save => "save",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction record. Its existence is the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub post_id: PostId,
    pub user_id: UserId,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    pub fn new(post_id: PostId, user_id: UserId, kind: ReactionKind) -> Self {
        Self {
            post_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Aggregated reaction tallies for a post (or for a user's activity)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub likes: i64,
    pub dislikes: i64,
    pub saves: i64,
}

impl ReactionCounts {
    pub fn get(&self, kind: ReactionKind) -> i64 {
        match kind {
            ReactionKind::Like => self.likes,
            ReactionKind::Dislike => self.dislikes,
            ReactionKind::Save => self.saves,
        }
    }

    pub fn set(&mut self, kind: ReactionKind, value: i64) {
        match kind {
            ReactionKind::Like => self.likes = value,
            ReactionKind::Dislike => self.dislikes = value,
            ReactionKind::Save => self.saves = value,
        }
    }
}
