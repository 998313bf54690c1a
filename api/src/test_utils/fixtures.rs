//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::NewPost;

/// Fixed reference instant so time-window tests are deterministic
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 28, 17, 43, 4).unwrap()
}

/// A storable post with the given title and creation time
pub fn new_post_at(title: &str, created_at: DateTime<Utc>) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: format!("Content of {}", title),
        created_at,
    }
}
