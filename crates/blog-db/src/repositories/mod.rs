//! Repository implementations
//!
//! PostgreSQL implementations of the persistence traits defined in blog-core.

mod error;
mod post;
mod reaction;
mod user;

pub use post::PgPostRepository;
pub use reaction::{PgReactionStore, PgReactionUnitOfWork};
pub use user::PgUserRepository;
