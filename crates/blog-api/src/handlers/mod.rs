//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod posts;
pub mod reactions;
pub mod root;
pub mod users;
