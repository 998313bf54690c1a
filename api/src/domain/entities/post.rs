//! Post domain entity
//!
//! A short text post. Posts are created once and never edited; the id and
//! creation time are always assigned server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum title length, counted in characters rather than bytes
pub const TITLE_MAX_CHARS: usize = 255;

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new post, already checked by the request layer
#[derive(Debug, Clone)]
pub struct PostInput {
    pub title: String,
    pub content: String,
}

impl PostInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Re-check the creation contract. Blank means empty after trimming.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be blank".into()));
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "title must be at most {} characters",
                TITLE_MAX_CHARS
            )));
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::Validation("content must not be blank".into()));
        }
        Ok(())
    }
}

/// Data handed to the store; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
