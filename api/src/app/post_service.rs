//! Post creation service
//!
//! Stamps new posts with the server clock and hands them to the store.

use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, PostInput};
use crate::domain::ports::{Clock, PostRepository};
use crate::error::DomainError;

/// Service for creating posts
pub struct PostService<R, C>
where
    R: PostRepository,
    C: Clock,
{
    posts: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> PostService<R, C>
where
    R: PostRepository,
    C: Clock,
{
    pub fn new(posts: Arc<R>, clock: Arc<C>) -> Self {
        Self { posts, clock }
    }

    /// Create a post from already-validated input.
    ///
    /// The input is checked again before anything is stored. Store failures
    /// come back as `DomainError::Persistence`.
    pub async fn create(&self, input: PostInput) -> Result<Post, DomainError> {
        input.validate()?;

        let new_post = NewPost {
            title: input.title,
            content: input.content,
            created_at: self.clock.now(),
        };

        let post = self.posts.save(&new_post).await?;
        tracing::info!(post_id = %post.id, "Post created");

        Ok(post)
    }
}
