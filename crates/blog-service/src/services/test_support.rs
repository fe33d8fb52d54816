//! Fixtures shared by the service unit tests

use std::sync::Arc;

use blog_common::auth::JwtService;
use blog_core::entities::{Post, User};
use blog_core::traits::{PostRepository, UserRepository};
use blog_db::MemoryStore;

use super::context::ServiceContext;

pub const PASSWORD: &str = "Str0ng!Pass";

pub fn memory_context() -> (ServiceContext, MemoryStore) {
    let store = MemoryStore::new();
    let jwt = Arc::new(JwtService::new("service-test-secret", 3600));
    (ServiceContext::in_memory(store.clone(), jwt), store)
}

pub async fn seed_user(store: &MemoryStore, name: &str) -> User {
    let user = User::new(name.to_string(), format!("{}@example.com", name.to_lowercase()));
    UserRepository::create(store, &user, "unused-hash").await.unwrap();
    user
}

pub async fn seed_post(store: &MemoryStore, author: &User, title: &str, published: bool) -> Post {
    let mut post = Post::new(
        author.id,
        title.to_string(),
        "A perfectly reasonable body".to_string(),
        vec!["general".to_string()],
    );
    post.published = published;
    PostRepository::create(store, &post).await.unwrap();
    post
}
