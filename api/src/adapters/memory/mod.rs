//! In-memory adapters
//!
//! Process-local implementations of repository traits. Used as the test fake
//! and for running the API without a database.

pub mod post_repo;

pub use post_repo::InMemoryPostRepository;
