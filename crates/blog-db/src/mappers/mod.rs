//! Entity to model mappers
//!
//! - `From<Model> for Entity`: convert database rows to domain objects
//! - `reaction_table`: the relation backing each reaction kind

mod post;
mod reaction;
mod user;

pub use reaction::reaction_table;
