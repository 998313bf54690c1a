//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod feed_mode;
pub mod post;

pub use feed_mode::FeedMode;
pub use post::{NewPost, Post, PostId, PostInput, TITLE_MAX_CHARS};
