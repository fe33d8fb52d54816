//! Post service
//!
//! Authoring and reading posts. Reactions live in [`super::reaction`].

use blog_core::entities::{AuthoredPost, Post};
use blog_core::{slugify, DomainError, PostId, UserId};
use tracing::{debug, info, instrument};

use crate::dto::{CreatePostRequest, PostResponse, PostWithCountsResponse, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a draft post owned by `author_id`
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        author_id: UserId,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", author_id.to_string()))?;

        let title = request.title.trim().to_string();
        self.ensure_slug_free(&title, None).await?;

        let post = Post::new(
            author_id,
            title,
            request.content,
            normalize_tags(request.tags),
        );

        self.ctx
            .post_repo()
            .create(&post)
            .await
            .map_err(|e| slug_conflict(e, &post.title))?;

        info!(post_id = %post.id, slug = %post.slug, "Post created");

        Ok(AuthoredPost {
            post,
            author: author.as_author(),
        }
        .into())
    }

    /// Read a post; drafts are only visible to their author
    #[instrument(skip(self))]
    pub async fn get(&self, post_id: PostId, viewer: Option<UserId>) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .filter(|post| post.is_visible_to(viewer))
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        self.with_author(post).await
    }

    /// Update a post; only its author may do so
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        author_id: UserId,
        post_id: PostId,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let mut post = self.owned_post(author_id, post_id).await?;

        if let Some(title) = request.title {
            let title = title.trim().to_string();
            if title != post.title {
                self.ensure_slug_free(&title, Some(post.id)).await?;
                post.set_title(title);
            }
        }
        if let Some(content) = request.content {
            post.set_content(content);
        }
        if let Some(tags) = request.tags {
            post.set_tags(normalize_tags(tags));
        }
        if let Some(published) = request.published {
            post.set_published(published);
        }

        self.ctx
            .post_repo()
            .update(&post)
            .await
            .map_err(|e| slug_conflict(e, &post.title))?;

        info!(post_id = %post.id, published = post.published, "Post updated");

        self.with_author(post).await
    }

    /// Delete a post and, with it, every reaction on it
    #[instrument(skip(self))]
    pub async fn delete(&self, author_id: UserId, post_id: PostId) -> ServiceResult<()> {
        self.owned_post(author_id, post_id).await?;
        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }

    /// The caller's posts, drafts included, with reaction tallies
    #[instrument(skip(self))]
    pub async fn list_mine(&self, author_id: UserId) -> ServiceResult<Vec<PostWithCountsResponse>> {
        let posts = self.ctx.post_repo().find_by_author(author_id).await?;
        debug!(count = posts.len(), "Fetched author posts");

        let mut result = Vec::with_capacity(posts.len());
        for post in posts {
            let counts = self.ctx.post_repo().counts(post.id).await?;
            result.push(PostWithCountsResponse::new(post.into(), counts));
        }

        Ok(result)
    }

    async fn with_author(&self, post: Post) -> ServiceResult<PostResponse> {
        let author = self.ctx.user_repo().find_by_id(post.author_id).await?;

        Ok(match author {
            Some(author) => AuthoredPost {
                post,
                author: author.as_author(),
            }
            .into(),
            None => post.into(),
        })
    }

    async fn owned_post(&self, author_id: UserId, post_id: PostId) -> ServiceResult<Post> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        if !post.is_authored_by(author_id) {
            return Err(DomainError::NotPostAuthor.into());
        }

        Ok(post)
    }

    async fn ensure_slug_free(&self, title: &str, current: Option<PostId>) -> ServiceResult<()> {
        let slug = slugify(title);
        if slug.is_empty() {
            return Err(ServiceError::validation(
                "Title must contain at least one letter or digit",
            ));
        }

        match self.ctx.post_repo().find_by_slug(&slug).await? {
            Some(existing) if Some(existing.id) != current => Err(title_taken(&existing.title)),
            _ => Ok(()),
        }
    }
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().map(|tag| tag.trim().to_string()).collect()
}

fn title_taken(title: &str) -> ServiceError {
    ServiceError::conflict(format!("Post with title {title} already exists"))
}

fn slug_conflict(err: DomainError, title: &str) -> ServiceError {
    match err {
        DomainError::SlugAlreadyExists => title_taken(title),
        DomainError::PostNotFound(id) => ServiceError::not_found("Post", id.to_string()),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{memory_context, seed_post, seed_user};
    use crate::services::ReactionService;

    fn create_request(title: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            tags: vec![" rust ".to_string(), "tokio".to_string()],
            content: "Once upon a time, in a runtime far away".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_post() {
        let (ctx, store) = memory_context();
        let author = seed_user(&store, "Author").await;

        let post = PostService::new(&ctx)
            .create(author.id, create_request("My First Story"))
            .await
            .unwrap();

        assert_eq!(post.slug, "my-first-story");
        assert!(!post.published);
        assert_eq!(post.tags, vec!["rust", "tokio"]);
        assert_eq!(post.author.unwrap().id, author.id);
    }

    #[tokio::test]
    async fn test_duplicate_title_conflicts() {
        let (ctx, store) = memory_context();
        let author = seed_user(&store, "Author").await;
        let service = PostService::new(&ctx);

        service.create(author.id, create_request("My First Story")).await.unwrap();
        let err = service
            .create(author.id, create_request("my first story!"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 409);
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_unsluggable_title_rejected() {
        let (ctx, store) = memory_context();
        let author = seed_user(&store, "Author").await;

        let err = PostService::new(&ctx)
            .create(author.id, create_request("?!?!?!"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 422);
    }

    #[tokio::test]
    async fn test_draft_visibility() {
        let (ctx, store) = memory_context();
        let author = seed_user(&store, "Author").await;
        let other = seed_user(&store, "Other").await;
        let draft = seed_post(&store, &author, "A draft story", false).await;
        let service = PostService::new(&ctx);

        assert!(service.get(draft.id, Some(author.id)).await.is_ok());
        assert_eq!(service.get(draft.id, Some(other.id)).await.unwrap_err().status_code(), 404);
        assert_eq!(service.get(draft.id, None).await.unwrap_err().status_code(), 404);
    }

    #[tokio::test]
    async fn test_only_author_updates_and_deletes() {
        let (ctx, store) = memory_context();
        let author = seed_user(&store, "Author").await;
        let other = seed_user(&store, "Other").await;
        let post = seed_post(&store, &author, "A draft story", false).await;
        let service = PostService::new(&ctx);

        let request = UpdatePostRequest {
            published: Some(true),
            ..Default::default()
        };
        let err = service.update(other.id, post.id, request.clone()).await.unwrap_err();
        assert_eq!(err.status_code(), 403);

        let updated = service.update(author.id, post.id, request).await.unwrap();
        assert!(updated.published);
        let summary = updated.author.expect("update carries the author summary");
        assert_eq!(summary.id, author.id);
        assert_eq!(summary.name, "Author");

        assert_eq!(service.delete(other.id, post.id).await.unwrap_err().status_code(), 403);
    }

    #[tokio::test]
    async fn test_retitle_reslugs_and_checks_conflicts() {
        let (ctx, store) = memory_context();
        let author = seed_user(&store, "Author").await;
        let first = seed_post(&store, &author, "First story here", true).await;
        seed_post(&store, &author, "Second story here", true).await;
        let service = PostService::new(&ctx);

        let taken = UpdatePostRequest {
            title: Some("Second Story Here".to_string()),
            ..Default::default()
        };
        let err = service.update(author.id, first.id, taken).await.unwrap_err();
        assert_eq!(err.status_code(), 409);

        let fresh = UpdatePostRequest {
            title: Some("A whole new title".to_string()),
            ..Default::default()
        };
        let updated = service.update(author.id, first.id, fresh).await.unwrap();
        assert_eq!(updated.slug, "a-whole-new-title");
    }

    #[tokio::test]
    async fn test_delete_cascades_reactions() {
        let (ctx, store) = memory_context();
        let author = seed_user(&store, "Author").await;
        let reader = seed_user(&store, "Reader").await;
        let post = seed_post(&store, &author, "A published story", true).await;

        ReactionService::new(&ctx).toggle_save(post.id, Some(reader.id)).await.unwrap();
        PostService::new(&ctx).delete(author.id, post.id).await.unwrap();

        assert_eq!(store.reactions_for_pair(post.id, reader.id), 0);
        let err = ReactionService::new(&ctx)
            .toggle_save(post.id, Some(reader.id))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_list_mine_with_counts() {
        let (ctx, store) = memory_context();
        let author = seed_user(&store, "Author").await;
        let reader = seed_user(&store, "Reader").await;
        let post = seed_post(&store, &author, "A published story", true).await;
        seed_post(&store, &author, "A draft story", false).await;
        seed_post(&store, &reader, "Somebody else's story", true).await;

        let reactions = ReactionService::new(&ctx);
        reactions.toggle_like(post.id, Some(reader.id)).await.unwrap();
        reactions.toggle_save(post.id, Some(reader.id)).await.unwrap();

        let mine = PostService::new(&ctx).list_mine(author.id).await.unwrap();
        assert_eq!(mine.len(), 2);

        let published = mine.iter().find(|p| p.post.id == post.id).unwrap();
        assert_eq!(published.like_count, 1);
        assert_eq!(published.dislike_count, 0);
        assert_eq!(published.save_count, 1);
    }
}
