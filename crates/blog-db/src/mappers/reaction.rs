//! Reaction kind <-> relation mapping

use blog_core::entities::{ReactionCounts, ReactionKind};

use crate::models::ReactionTotalsModel;

/// Table holding the records of one reaction kind
///
/// Only ever interpolated from this fixed set, never from input.
pub const fn reaction_table(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => "post_likes",
        ReactionKind::Dislike => "post_dislikes",
        ReactionKind::Save => "post_saves",
    }
}

impl From<ReactionTotalsModel> for ReactionCounts {
    fn from(model: ReactionTotalsModel) -> Self {
        ReactionCounts {
            likes: model.likes,
            dislikes: model.dislikes,
            saves: model.saves,
        }
    }
}
