//! Entity to DTO mappers

use blog_core::entities::{Author, AuthoredPost, Post, ReactionCounts, User};

use super::responses::{
    AuthorResponse, PostResponse, PostWithCountsResponse, ProfileResponse, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            content: post.content,
            tags: post.tags,
            published: post.published,
            author: None,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<AuthoredPost> for PostResponse {
    fn from(authored: AuthoredPost) -> Self {
        Self {
            author: Some(authored.author.into()),
            ..Self::from(authored.post)
        }
    }
}

impl ProfileResponse {
    pub fn new(user: &User, totals: ReactionCounts) -> Self {
        Self {
            user: user.into(),
            liked_posts: totals.likes,
            disliked_posts: totals.dislikes,
            saved_posts: totals.saves,
        }
    }
}

impl PostWithCountsResponse {
    pub fn new(post: PostResponse, counts: ReactionCounts) -> Self {
        Self {
            post,
            like_count: counts.likes,
            dislike_count: counts.dislikes,
            save_count: counts.saves,
        }
    }
}
