//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::adapters::InMemoryPostRepository;
use crate::domain::entities::{NewPost, Post};
use crate::domain::ports::{Clock, PostRepository};
use crate::error::DomainError;

// ============================================================================
// Manual Clock
// ============================================================================

/// Clock that only moves when a test says so
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}

// ============================================================================
// Failing Post Repository
// ============================================================================

/// In-memory store whose saves and reads can be switched to fail
#[derive(Default)]
pub struct FailingPostRepository {
    inner: InMemoryPostRepository,
    fail_saves: AtomicBool,
    fail_reads: AtomicBool,
}

impl FailingPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn check_reads(&self) -> Result<(), DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("simulated read failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn save(&self, post: &NewPost) -> Result<Post, DomainError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("simulated save failure".into()));
        }
        self.inner.save(post).await
    }

    async fn find_random_order(&self) -> Result<Vec<Post>, DomainError> {
        self.check_reads()?;
        self.inner.find_random_order().await
    }

    async fn find_recent_window(
        &self,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<Vec<Post>, DomainError> {
        self.check_reads()?;
        self.inner.find_recent_window(now, window).await
    }

    async fn find_all_chronological(&self) -> Result<Vec<Post>, DomainError> {
        self.check_reads()?;
        self.inner.find_all_chronological().await
    }
}
