//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (PostgreSQL, in-memory).

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{NewPost, Post};
use crate::error::DomainError;

/// Repository for Post entities
///
/// Every failure is reported as `DomainError::Persistence`. Reads either
/// return the complete result set or fail.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post and return it with its assigned id
    async fn save(&self, post: &NewPost) -> Result<Post, DomainError>;

    /// All posts in an unspecified order that may change between calls
    async fn find_random_order(&self) -> Result<Vec<Post>, DomainError>;

    /// Posts created at or after `now - window`, newest first.
    /// A window reaching past the earliest representable instant covers every post.
    async fn find_recent_window(
        &self,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<Vec<Post>, DomainError>;

    /// All posts, oldest first
    async fn find_all_chronological(&self) -> Result<Vec<Post>, DomainError>;
}

/// Earliest `created_at` inside the window, or `None` when `now - window`
/// falls outside chrono's range (the window then has no lower bound)
pub fn window_start(now: DateTime<Utc>, window: Duration) -> Option<DateTime<Utc>> {
    now.checked_sub_signed(window)
}
