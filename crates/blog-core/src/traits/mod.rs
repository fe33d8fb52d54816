//! Persistence traits (ports)

mod repositories;

pub use repositories::{
    PostRepository, ReactionStore, ReactionUnitOfWork, RepoResult, UserRepository,
};
