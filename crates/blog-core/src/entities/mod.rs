//! Domain entities

mod post;
mod reaction;
mod user;

pub use post::{AuthoredPost, Post};
pub use reaction::{Reaction, ReactionCounts, ReactionKind};
pub use user::{Author, User};
