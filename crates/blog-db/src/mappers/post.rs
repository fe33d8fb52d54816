//! Post entity <-> model mapper

use blog_core::entities::{Author, AuthoredPost, Post};
use blog_core::value_objects::{PostId, UserId};

use crate::models::{AuthoredPostModel, PostModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::from_uuid(model.id),
            title: model.title,
            slug: model.slug,
            content: model.content,
            tags: model.tags,
            published: model.published,
            author_id: UserId::from_uuid(model.author_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<AuthoredPostModel> for AuthoredPost {
    fn from(model: AuthoredPostModel) -> Self {
        let post = Post::from(model.post);
        AuthoredPost {
            author: Author {
                id: post.author_id,
                name: model.author_name,
            },
            post,
        }
    }
}
