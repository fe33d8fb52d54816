//! Value objects - identifiers and derived values

mod ids;
mod slug;

pub use ids::{IdParseError, PostId, UserId};
pub use slug::slugify;
