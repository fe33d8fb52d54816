//! Reaction aggregate models

use sqlx::FromRow;

/// Row of three counters, one per reaction relation
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ReactionTotalsModel {
    pub likes: i64,
    pub dislikes: i64,
    pub saves: i64,
}
