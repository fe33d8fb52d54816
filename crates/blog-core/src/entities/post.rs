//! Post entity - a blog post owned by one author

use chrono::{DateTime, Utc};

use super::user::Author;
use crate::value_objects::{slugify, PostId, UserId};

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub tags: Vec<String>,
    /// Reactions are only accepted on published posts
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, unpublished post. The slug is derived from the title.
    pub fn new(author_id: UserId, title: String, content: String, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: PostId::new(),
            slug: slugify(&title),
            title,
            content,
            tags,
            published: false,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Published posts are public; drafts are only visible to their author
    pub fn is_visible_to(&self, viewer: Option<UserId>) -> bool {
        self.published || viewer.is_some_and(|id| self.is_authored_by(id))
    }

    /// Change the title and re-derive the slug
    pub fn set_title(&mut self, title: String) {
        self.slug = slugify(&title);
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
        self.updated_at = Utc::now();
    }

    pub fn set_published(&mut self, published: bool) {
        self.published = published;
        self.updated_at = Utc::now();
    }
}

/// A post together with its author's public summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoredPost {
    pub post: Post,
    pub author: Author,
}
