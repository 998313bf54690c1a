//! In-memory adapter for PostRepository

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;

use crate::domain::entities::{NewPost, Post, PostId};
use crate::domain::ports::{window_start, PostRepository};
use crate::error::DomainError;

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Persistence("post store lock poisoned".to_string())
}

/// Posts kept in insertion order behind a lock
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().map_err(poisoned)?.clone())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn save(&self, post: &NewPost) -> Result<Post, DomainError> {
        let post = Post {
            id: PostId::new(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
        };

        self.posts.write().map_err(poisoned)?.push(post.clone());
        Ok(post)
    }

    async fn find_random_order(&self) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.snapshot()?;
        posts.shuffle(&mut rand::thread_rng());
        Ok(posts)
    }

    async fn find_recent_window(
        &self,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<Vec<Post>, DomainError> {
        let cutoff = window_start(now, window);
        let mut posts: Vec<Post> = self
            .snapshot()?
            .into_iter()
            .filter(|p| cutoff.map_or(true, |c| p.created_at >= c))
            .collect();
        // Stable sort, then reverse: equal timestamps come out newest-inserted first
        posts.sort_by_key(|p| p.created_at);
        posts.reverse();
        Ok(posts)
    }

    async fn find_all_chronological(&self) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.snapshot()?;
        posts.sort_by_key(|p| p.created_at);
        Ok(posts)
    }
}
