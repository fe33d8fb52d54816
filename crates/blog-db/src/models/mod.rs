//! Database models - SQLx-compatible structs for PostgreSQL tables

mod post;
mod reaction;
mod user;

pub use post::{AuthoredPostModel, PostModel};
pub use reaction::ReactionTotalsModel;
pub use user::UserModel;
