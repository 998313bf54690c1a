//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod posts;

pub use posts::{create_post, list_posts};
