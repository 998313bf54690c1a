//! Feed service
//!
//! Picks the store query for a requested feed mode. An unknown mode is not an
//! error; it gets the chronological feed.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::entities::{FeedMode, Post};
use crate::domain::ports::{Clock, PostRepository};
use crate::error::DomainError;

/// Service for reading post feeds
pub struct FeedService<R, C>
where
    R: PostRepository,
    C: Clock,
{
    posts: Arc<R>,
    clock: Arc<C>,
    recent_window: Duration,
}

impl<R, C> FeedService<R, C>
where
    R: PostRepository,
    C: Clock,
{
    pub fn new(posts: Arc<R>, clock: Arc<C>, recent_window: Duration) -> Self {
        Self {
            posts,
            clock,
            recent_window,
        }
    }

    /// Feed for a raw `mode` value, if any
    pub async fn get_feed(&self, mode: Option<&str>) -> Result<Vec<Post>, DomainError> {
        self.feed(FeedMode::from(mode)).await
    }

    pub async fn feed(&self, mode: FeedMode) -> Result<Vec<Post>, DomainError> {
        let posts = match mode {
            FeedMode::Random => self.posts.find_random_order().await?,
            FeedMode::LastMinute => {
                self.posts
                    .find_recent_window(self.clock.now(), self.recent_window)
                    .await?
            }
            FeedMode::Chronological => self.posts.find_all_chronological().await?,
        };

        tracing::debug!(%mode, count = posts.len(), "Feed selected");
        Ok(posts)
    }
}
